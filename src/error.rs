use std::fmt;

/// Failure modes of the [GCM construction](crate::Gcm) and its one-shot
/// [`Gcm::encrypt`](crate::Gcm::encrypt)/[`Gcm::decrypt`](crate::Gcm::decrypt)
/// entry points.
///
/// None of these are panics: every fallible operation in this crate returns
/// one of these variants instead of aborting. No variant carries
/// variable-length diagnostic detail; error identity alone is the
/// information, which keeps [`Error::AuthenticationFailed`] from acting as an
/// oracle for *why* a tag failed to verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key passed to [`Gcm::new`](crate::Gcm::new) is not 16, 24, 32
    /// bytes long (or 64 bytes, under the `experimental-aes512` feature).
    InvalidKeyLength,
    /// An argument other than the key was malformed, e.g. a zero-length IV.
    InvalidArgument,
    /// The tag supplied to [`Gcm::decrypt`](crate::Gcm::decrypt) did not match
    /// the computed tag. The plaintext output buffer was zeroed before this
    /// error was returned; no plaintext bytes are exposed on this path.
    AuthenticationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            #[cfg(not(feature = "experimental-aes512"))]
            Error::InvalidKeyLength => "key length must be 16, 24, or 32 bytes",
            #[cfg(feature = "experimental-aes512")]
            Error::InvalidKeyLength => "key length must be 16, 24, 32, or 64 bytes",
            Error::InvalidArgument => "invalid argument (e.g. zero-length IV)",
            Error::AuthenticationFailed => "GCM tag verification failed",
        })
    }
}

impl std::error::Error for Error {}

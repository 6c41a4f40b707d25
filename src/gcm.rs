//! The GCM authenticated-encryption construction (NIST SP 800-38D Section 7):
//! deriving H and J0 from the IV, driving [GHASH](crate::ghash) over AAD,
//! ciphertext, and lengths, and the one-shot encrypt/decrypt entry points.

use {
    crate::{
        block::{Aes128, Aes192, Aes256, BlockEncrypt},
        ctr,
        error::Error,
        ghash::Ghash,
    },
    subtle::ConstantTimeEq,
    zeroize::Zeroize,
};

#[cfg(feature = "experimental-aes512")]
use crate::block::Aes512;

/// Length of a GCM authentication tag. GCM tag truncation is not supported by
/// this crate.
pub const TAG_LEN: usize = 16;

/// The 96-bit IV length that selects the fast-path J0 derivation
/// (IV ∥ 0x00000001) instead of the GHASH-based one.
const STANDARD_IV_LEN: usize = 12;

/// A GCM session bound to one block cipher key.
///
/// Construct through [`Gcm::new`] for a runtime-determined key length, or
/// directly with any [`BlockEncrypt`] implementor (e.g. [`Aes128`], to skip
/// the key-length dispatch when the size is known at compile time).
///
/// [`Aes128`]: crate::block::Aes128
pub struct GcmContext<C> {
    cipher: C,
}

impl<C: BlockEncrypt> GcmContext<C> {
    /// Wrap an already-keyed block cipher for use as a GCM session.
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Derive H = $E_K(0^{128})$, the GHASH subkey.
    fn derive_h(&self) -> [u8; 16] {
        let mut h = [0u8; 16];
        self.cipher.encrypt_block(&mut h);
        h
    }

    /// Derive J0, the initial counter block, from `iv` and the hash subkey
    /// `h`.
    ///
    /// For a 96-bit IV: `IV ∥ 0x00000001`. Otherwise: GHASH the IV (which
    /// zero-pads internally) followed by a 16-byte block holding just the
    /// IV's bit length in its rightmost 8 bytes.
    fn derive_j0(&self, iv: &[u8], h: [u8; 16]) -> [u8; 16] {
        if iv.len() == STANDARD_IV_LEN {
            let mut j0 = [0u8; 16];
            j0[..STANDARD_IV_LEN].copy_from_slice(iv);
            j0[15] = 1;
            j0
        } else {
            let mut len_block = [0u8; 16];
            len_block[8..].copy_from_slice(&((iv.len() as u64) * 8).to_be_bytes());

            let mut ghash = Ghash::new(h);
            ghash.update(iv);
            ghash.update(&len_block);
            ghash.finish()
        }
    }

    /// Encrypt `plaintext` under `iv` and `aad`, returning the ciphertext
    /// (same length as `plaintext`) and the 16-byte tag.
    ///
    /// `iv` must be non-empty. A 12-byte IV takes the fast path to J0; any
    /// other non-empty length takes the GHASH-based derivation (§4.6.1).
    pub fn encrypt(
        &self,
        iv: &[u8],
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, [u8; TAG_LEN]), Error> {
        if iv.is_empty() {
            return Err(Error::InvalidArgument);
        }

        let h = self.derive_h();
        let j0 = self.derive_j0(iv, h);
        let mut ek0 = j0;
        self.cipher.encrypt_block(&mut ek0);

        let mut ciphertext = plaintext.to_vec();
        let mut counter = j0;
        ctr::increment32(&mut counter);
        ctr::apply_keystream(&self.cipher, &mut counter, &mut ciphertext);

        let mut ghash = Ghash::new(h);
        ghash.update(aad);
        ghash.update(&ciphertext);
        ghash.update(&length_block(aad.len(), plaintext.len()));
        let s = ghash.finish();

        let mut tag = [0u8; TAG_LEN];
        for i in 0..TAG_LEN {
            tag[i] = s[i] ^ ek0[i];
        }

        ek0.zeroize();
        Ok((ciphertext, tag))
    }

    /// Verify `tag` against `iv`, `aad`, and `ciphertext`, and if it matches
    /// return the decrypted plaintext. On a mismatch, no plaintext bytes are
    /// produced: this method computes and checks the tag *before* running
    /// the keystream, exactly as the encrypt path's mirror image requires.
    pub fn decrypt(
        &self,
        iv: &[u8],
        aad: &[u8],
        ciphertext: &[u8],
        tag: &[u8; TAG_LEN],
    ) -> Result<Vec<u8>, Error> {
        if iv.is_empty() {
            return Err(Error::InvalidArgument);
        }

        let h = self.derive_h();
        let j0 = self.derive_j0(iv, h);
        let mut ek0 = j0;
        self.cipher.encrypt_block(&mut ek0);

        let mut ghash = Ghash::new(h);
        ghash.update(aad);
        ghash.update(ciphertext);
        ghash.update(&length_block(aad.len(), ciphertext.len()));
        let s = ghash.finish();

        let mut computed_tag = [0u8; TAG_LEN];
        for i in 0..TAG_LEN {
            computed_tag[i] = s[i] ^ ek0[i];
        }
        ek0.zeroize();

        if computed_tag.ct_eq(tag).into() {
            let mut plaintext = ciphertext.to_vec();
            let mut counter = j0;
            ctr::increment32(&mut counter);
            ctr::apply_keystream(&self.cipher, &mut counter, &mut plaintext);
            Ok(plaintext)
        } else {
            Err(Error::AuthenticationFailed)
        }
    }
}

/// AES-GCM keyed with a runtime-determined key length.
///
/// Dispatches to [`Aes128`]/[`Aes192`]/[`Aes256`] (and, under the
/// `experimental-aes512` feature, the non-standard `Aes512` variant) based on
/// the byte length of the key passed to [`Gcm::new`], so callers that accept
/// a key from configuration or the network are not forced to match on its
/// length themselves.
pub enum Gcm {
    Aes128(GcmContext<Aes128>),
    Aes192(GcmContext<Aes192>),
    Aes256(GcmContext<Aes256>),
    #[cfg(feature = "experimental-aes512")]
    Aes512(GcmContext<Aes512>),
}

impl Gcm {
    /// Construct a GCM session from `key`, selecting the AES variant by
    /// `key.len()`: 16 bytes for AES-128, 24 for AES-192, 32 for AES-256
    /// (and, under `experimental-aes512`, 64 bytes for the experimental
    /// variant). Any other length is [`Error::InvalidKeyLength`].
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        match key.len() {
            16 => Ok(Gcm::Aes128(GcmContext::new(Aes128::new(
                key.try_into().unwrap(),
            )))),
            24 => Ok(Gcm::Aes192(GcmContext::new(Aes192::new(
                key.try_into().unwrap(),
            )))),
            32 => Ok(Gcm::Aes256(GcmContext::new(Aes256::new(
                key.try_into().unwrap(),
            )))),
            #[cfg(feature = "experimental-aes512")]
            64 => Ok(Gcm::Aes512(GcmContext::new(Aes512::new(
                key.try_into().unwrap(),
            )))),
            _ => Err(Error::InvalidKeyLength),
        }
    }

    /// See [`GcmContext::encrypt`].
    pub fn encrypt(
        &self,
        iv: &[u8],
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, [u8; TAG_LEN]), Error> {
        match self {
            Gcm::Aes128(ctx) => ctx.encrypt(iv, aad, plaintext),
            Gcm::Aes192(ctx) => ctx.encrypt(iv, aad, plaintext),
            Gcm::Aes256(ctx) => ctx.encrypt(iv, aad, plaintext),
            #[cfg(feature = "experimental-aes512")]
            Gcm::Aes512(ctx) => ctx.encrypt(iv, aad, plaintext),
        }
    }

    /// See [`GcmContext::decrypt`].
    pub fn decrypt(
        &self,
        iv: &[u8],
        aad: &[u8],
        ciphertext: &[u8],
        tag: &[u8; TAG_LEN],
    ) -> Result<Vec<u8>, Error> {
        match self {
            Gcm::Aes128(ctx) => ctx.decrypt(iv, aad, ciphertext, tag),
            Gcm::Aes192(ctx) => ctx.decrypt(iv, aad, ciphertext, tag),
            Gcm::Aes256(ctx) => ctx.decrypt(iv, aad, ciphertext, tag),
            #[cfg(feature = "experimental-aes512")]
            Gcm::Aes512(ctx) => ctx.decrypt(iv, aad, ciphertext, tag),
        }
    }
}

/// Build the final GHASH block: an 8-byte big-endian AAD bit-length followed
/// by an 8-byte big-endian ciphertext/plaintext bit-length.
fn length_block(aad_len: usize, data_len: usize) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[..8].copy_from_slice(&((aad_len as u64) * 8).to_be_bytes());
    block[8..].copy_from_slice(&((data_len as u64) * 8).to_be_bytes());
    block
}

/// Bit-serial constant-time byte-slice comparison: XOR-accumulate every byte
/// pair into one accumulator, consult it only once at the end, and never
/// short-circuit on a mismatch.
///
/// This exists only as a reference contract for `subtle::ConstantTimeEq`'s
/// byte-slice comparison, exercised in `tests::subtle_matches_bit_serial_reference`
/// below; [`GcmContext::decrypt`] uses `subtle` directly.
#[cfg(test)]
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_time_eq_matches_naive_equality() {
        assert!(constant_time_eq(b"abcdef", b"abcdef"));
        assert!(!constant_time_eq(b"abcdef", b"abcdeg"));
        assert!(!constant_time_eq(b"short", b"longer!"));
    }

    #[test]
    fn subtle_matches_bit_serial_reference() {
        let a = [0x11u8; 16];
        let b = [0x11u8; 16];
        let mut c = [0x11u8; 16];
        c[15] = 0x12;

        assert_eq!(bool::from(a.ct_eq(&b)), constant_time_eq(&a, &b));
        assert_eq!(bool::from(a.ct_eq(&c)), constant_time_eq(&a, &c));
    }

    #[test]
    fn roundtrip_with_standard_iv_len() {
        let cipher = crate::block::Aes128::new(&[0u8; 16]);
        let ctx = GcmContext::new(cipher);
        let iv = [0u8; 12];
        let aad = b"header";
        let plaintext = b"hello gcm world";

        let (ciphertext, tag) = ctx.encrypt(&iv, aad, plaintext).unwrap();
        let recovered = ctx.decrypt(&iv, aad, &ciphertext, &tag).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn roundtrip_with_non_standard_iv_len() {
        let cipher = crate::block::Aes128::new(&[0u8; 16]);
        let ctx = GcmContext::new(cipher);
        let iv = [0x24u8; 8];
        let aad = b"";
        let plaintext = b"a message that spans more than one block of sixteen bytes";

        let (ciphertext, tag) = ctx.encrypt(&iv, aad, plaintext).unwrap();
        let recovered = ctx.decrypt(&iv, aad, &ciphertext, &tag).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn tampered_ciphertext_fails_to_decrypt() {
        let cipher = crate::block::Aes128::new(&[0u8; 16]);
        let ctx = GcmContext::new(cipher);
        let iv = [0u8; 12];
        let (mut ciphertext, tag) = ctx.encrypt(&iv, b"", b"super secret payload").unwrap();
        ciphertext[0] ^= 1;

        assert!(matches!(
            ctx.decrypt(&iv, b"", &ciphertext, &tag),
            Err(Error::AuthenticationFailed)
        ));
    }

    #[test]
    fn empty_iv_is_rejected() {
        let cipher = crate::block::Aes128::new(&[0u8; 16]);
        let ctx = GcmContext::new(cipher);
        assert!(matches!(
            ctx.encrypt(&[], b"", b"x"),
            Err(Error::InvalidArgument)
        ));
    }

    #[test]
    fn gcm_dispatches_on_key_length() {
        assert!(matches!(Gcm::new(&[0u8; 16]).unwrap(), Gcm::Aes128(_)));
        assert!(matches!(Gcm::new(&[0u8; 24]).unwrap(), Gcm::Aes192(_)));
        assert!(matches!(Gcm::new(&[0u8; 32]).unwrap(), Gcm::Aes256(_)));
        assert!(matches!(
            Gcm::new(&[0u8; 20]),
            Err(Error::InvalidKeyLength)
        ));
    }

    #[test]
    fn gcm_dispatcher_roundtrips() {
        let gcm = Gcm::new(&[0x5au8; 32]).unwrap();
        let iv = [0x11u8; 12];
        let (ciphertext, tag) = gcm.encrypt(&iv, b"aad", b"message body").unwrap();
        let recovered = gcm.decrypt(&iv, b"aad", &ciphertext, &tag).unwrap();
        assert_eq!(recovered, b"message body");
    }
}

//! An implementation of AES-GCM authenticated encryption (NIST SP 800-38D)
//! built from its mathematical foundations: the AES key schedule and forward
//! cipher, multiplication in $GF(2^128)$, the GHASH universal hash, and the
//! counter-mode construction GCM builds on top of them.
//!
//! # Scope
//!
//! This crate implements encryption and authenticated decryption only. There
//! is no AES decryption primitive, no ECB/CBC/other block modes, and no
//! hardware-accelerated (AES-NI / PCLMULQDQ) fast paths: every operation
//! here is the portable bit-serial reference algorithm, chosen for
//! correctness and auditability over throughput. See [`gf128`] for the field
//! arithmetic this choice is most visible in.
//!
//! # Example
//!
//! ```
//! use aes_gcm_core::Gcm;
//!
//! let gcm = Gcm::new(&[0x42; 32]).unwrap();
//! let iv = [0x24; 12];
//!
//! let (ciphertext, tag) = gcm.encrypt(&iv, b"header", b"attack at dawn").unwrap();
//! let plaintext = gcm.decrypt(&iv, b"header", &ciphertext, &tag).unwrap();
//! assert_eq!(plaintext, b"attack at dawn");
//! ```

mod block;
mod ctr;
mod error;
mod gcm;
mod gf128;
mod ghash;

#[cfg(test)]
mod test;

pub use block::{Aes128, Aes192, Aes256, BlockEncrypt};
pub use error::Error;
pub use gcm::{Gcm, GcmContext, TAG_LEN};

#[cfg(feature = "experimental-aes512")]
pub use block::Aes512;

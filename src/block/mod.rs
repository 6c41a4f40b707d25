//! The AES block cipher: [key schedule](schedule) plus the [forward
//! cipher](cipher) it drives.
//!
//! This module implements FIPS 197 encryption only, no decryption, no
//! modes of operation. [`Gcm`](crate::Gcm) is the only consumer; it needs
//! nothing else from AES.

mod cipher;
mod schedule;
mod tables;

pub use cipher::BlockEncrypt;

use schedule::key_expansion;

/// AES with a 128-bit key (Nk=4, Nr=10).
#[derive(Clone)]
pub struct Aes128(schedule::KeySchedule<176>);

impl Aes128 {
    pub fn new(key: &[u8; 16]) -> Self {
        Self(key_expansion::<4, 176>(key))
    }
}

impl BlockEncrypt for Aes128 {
    fn encrypt_block(&self, block: &mut [u8; 16]) {
        cipher::encrypt(block, &self.0)
    }
}

/// AES with a 192-bit key (Nk=6, Nr=12).
#[derive(Clone)]
pub struct Aes192(schedule::KeySchedule<208>);

impl Aes192 {
    pub fn new(key: &[u8; 24]) -> Self {
        Self(key_expansion::<6, 208>(key))
    }
}

impl BlockEncrypt for Aes192 {
    fn encrypt_block(&self, block: &mut [u8; 16]) {
        cipher::encrypt(block, &self.0)
    }
}

/// AES with a 256-bit key (Nk=8, Nr=14).
#[derive(Clone)]
pub struct Aes256(schedule::KeySchedule<240>);

impl Aes256 {
    pub fn new(key: &[u8; 32]) -> Self {
        Self(key_expansion::<8, 240>(key))
    }
}

impl BlockEncrypt for Aes256 {
    fn encrypt_block(&self, block: &mut [u8; 16]) {
        cipher::encrypt(block, &self.0)
    }
}

/// A non-standard 512-bit-key, 22-round variant of AES (Nk=16, Nr=22).
///
/// **This is not AES and not standardized.** Nr=22 follows the `Nk + 6`
/// pattern the real AES key sizes happen to share, but that pattern has no
/// published cryptanalysis behind it for a 16-word key. Treat this as
/// experimental, gated behind the `experimental-aes512` feature, and do not
/// use it where interoperability with a standard AES-GCM implementation is
/// required.
#[cfg(feature = "experimental-aes512")]
#[derive(Clone)]
pub struct Aes512(schedule::KeySchedule<368>);

#[cfg(feature = "experimental-aes512")]
impl Aes512 {
    pub fn new(key: &[u8; 64]) -> Self {
        Self(key_expansion::<16, 368>(key))
    }
}

#[cfg(feature = "experimental-aes512")]
impl BlockEncrypt for Aes512 {
    fn encrypt_block(&self, block: &mut [u8; 16]) {
        cipher::encrypt(block, &self.0)
    }
}

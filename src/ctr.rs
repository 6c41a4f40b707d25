//! The GCM counter-mode keystream (NIST SP 800-38D Section 6.5).
//!
//! This is deliberately not the general-purpose [`Ctr`](crate) block mode
//! seen elsewhere in block-cipher libraries, which increments a caller-chosen
//! nonce word over the *entire* block width: GCM increments only the
//! rightmost 32 bits of the counter, leaving the leftmost 96 bits (which
//! carry the IV-derived part of J0) untouched. Reusing a full-width counter
//! mode here would silently produce the wrong keystream for any (key, IV)
//! pair needing more than a handful of blocks.

use crate::block::BlockEncrypt;

/// Increment the rightmost 4 bytes of `counter`, read as a big-endian u32,
/// wrapping silently on overflow. The leftmost 12 bytes are untouched.
///
/// GCM's own security bound (at most $2^{32} - 2$ blocks per (key, IV) pair)
/// is the caller's responsibility; this function does not enforce it.
pub(crate) fn increment32(counter: &mut [u8; 16]) {
    let tail = <&mut [u8; 4]>::try_from(&mut counter[12..16]).unwrap();
    let n = u32::from_be_bytes(*tail).wrapping_add(1);
    *tail = n.to_be_bytes();
}

/// XOR the keystream generated from `counter` onward into `buf`, advancing
/// `counter` by one block for every 16 bytes (or fraction thereof) consumed.
///
/// For each 16-byte chunk of `buf`: encrypt the counter block, increment the
/// counter's rightmost 32 bits, then XOR the encrypted block into the chunk
/// (the increment happens before the encrypted block is applied, so `counter`
/// always holds the value that will be used *next*). The same routine
/// produces the keystream on both the encrypt and decrypt paths, run from
/// the same starting counter (J0 + 1).
pub(crate) fn apply_keystream<C: BlockEncrypt>(cipher: &C, counter: &mut [u8; 16], buf: &mut [u8]) {
    for chunk in buf.chunks_mut(16) {
        let mut keystream = *counter;
        cipher.encrypt_block(&mut keystream);
        increment32(counter);

        for (b, k) in chunk.iter_mut().zip(keystream.iter()) {
            *b ^= k;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::increment32;

    #[test]
    fn increments_only_rightmost_four_bytes() {
        let mut counter = [0xAAu8; 16];
        counter[12..16].copy_from_slice(&[0, 0, 0, 0xFF]);
        let leftmost = counter[..12].to_vec();

        increment32(&mut counter);

        assert_eq!(&counter[..12], leftmost.as_slice());
        assert_eq!(&counter[12..16], &[0, 0, 1, 0x00]);
    }

    #[test]
    fn wraps_silently_on_overflow() {
        let mut counter = [0u8; 16];
        counter[12..16].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        increment32(&mut counter);
        assert_eq!(&counter[12..16], &[0, 0, 0, 0]);
    }
}

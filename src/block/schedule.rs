//! KeyExpansion (FIPS 197 Section 5.2): turning a user key into the flat
//! round-key byte array the [cipher](super::cipher) consumes one round at a
//! time.

use {
    super::tables::{RCON, S_BOX},
    docext::docext,
    zeroize::Zeroize,
};

const WORD_SIZE: usize = 4;
const NB: usize = 4;

/// An expanded AES round-key schedule.
///
/// `EXP_BYTES` is `NB * (Nr + 1) * 4`: 176 for AES-128, 208 for AES-192, 240
/// for AES-256, and (under the `experimental-aes512` feature) 368 for the
/// non-standard 512-bit variant. `NR` is the round count implied by that key
/// size.
///
/// The schedule is a pure function of the key, computed once at construction
/// and read-only afterwards (the type has no methods that mutate it once
/// built). It is zeroized on drop, since leaking round keys is as bad as
/// leaking the original key.
#[derive(Clone)]
pub struct KeySchedule<const EXP_BYTES: usize> {
    round_keys: [u8; EXP_BYTES],
}

impl<const EXP_BYTES: usize> Drop for KeySchedule<EXP_BYTES> {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

impl<const EXP_BYTES: usize> KeySchedule<EXP_BYTES> {
    /// Number of rounds implied by this schedule's size: `EXP_BYTES / 16 - 1`.
    pub(crate) const fn rounds() -> usize {
        EXP_BYTES / 16 - 1
    }

    pub(crate) fn round_key(&self, round: usize) -> &[u8] {
        &self.round_keys[round * NB * WORD_SIZE..(round + 1) * NB * WORD_SIZE]
    }
}

/// The KeyExpansion routine defined in Section 5.2 of the AES specification.
///
/// Copies the user key into the first `NK` words of the schedule, then for
/// each following word `i`:
///
/// - if `i mod NK == 0`: [RotWord](rot_word) the previous word, substitute it
///   through the [S-box](S_BOX), and XOR its first byte with `Rcon[i / NK]`.
/// - else if `NK > 6 and i mod NK == 4` (256- and 512-bit keys only):
///   substitute the previous word through the S-box with no rotation.
/// - word `i` is then word `i - NK` XORed with the (possibly transformed)
///   previous word.
#[docext]
pub(crate) fn key_expansion<const NK: usize, const EXP_BYTES: usize>(
    key: &[u8],
) -> KeySchedule<EXP_BYTES> {
    debug_assert_eq!(key.len(), NK * WORD_SIZE);
    let nr = KeySchedule::<EXP_BYTES>::rounds();

    let mut w = [0u8; EXP_BYTES];
    w[..NK * WORD_SIZE].copy_from_slice(key);

    for i in NK..NB * (nr + 1) {
        let mut temp = [0u8; WORD_SIZE];
        temp.copy_from_slice(&w[(i - 1) * WORD_SIZE..i * WORD_SIZE]);

        if i % NK == 0 {
            rot_word(&mut temp);
            sub_word(&mut temp);
            temp[0] ^= RCON[i / NK];
        } else if NK > 6 && i % NK == 4 {
            sub_word(&mut temp);
        }

        for j in 0..WORD_SIZE {
            w[i * WORD_SIZE + j] = w[(i - NK) * WORD_SIZE + j] ^ temp[j];
        }
    }

    KeySchedule { round_keys: w }
}

/// The RotWord function defined in Section 5.2 of the AES specification.
///
/// Rotates a 4-byte word left by one byte: `[a0,a1,a2,a3] -> [a1,a2,a3,a0]`.
fn rot_word(word: &mut [u8; WORD_SIZE]) {
    word.rotate_left(1);
}

/// SubWord: substitute each byte of a word through the [S-box](S_BOX).
fn sub_word(word: &mut [u8; WORD_SIZE]) {
    for b in word.iter_mut() {
        *b = S_BOX[*b as usize];
    }
}

#[cfg(test)]
mod tests {
    use super::key_expansion;

    /// FIPS 197 Appendix A.1: the last round key (subkey\[10\]) for the
    /// well-known AES-128 test key.
    #[test]
    fn aes128_last_round_key_matches_fips_197_appendix_a1() {
        let key = [
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ];
        let sched = key_expansion::<4, 176>(&key);
        assert_eq!(
            sched.round_key(10),
            &[
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
                0x0c, 0xa6,
            ]
        );
    }
}

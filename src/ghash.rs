//! GHASH (NIST SP 800-38D Section 6.4): the universal hash that authenticates
//! both the additional authenticated data and the ciphertext in GCM.

use {crate::gf128::gf_mul, zeroize::Zeroize};

/// A running GHASH computation over a fixed hash subkey `H`.
///
/// Blocks are absorbed with [`Ghash::update`] in the order AAD, then
/// ciphertext, then the length block; GCM drives all three through the same
/// accumulator, which is exactly what this type models. `H` and the running
/// accumulator are both secret-dependent (H is derived from the key) and are
/// zeroized on drop.
pub(crate) struct Ghash {
    h: [u8; 16],
    s: [u8; 16],
}

impl Drop for Ghash {
    fn drop(&mut self) {
        self.h.zeroize();
        self.s.zeroize();
    }
}

impl Ghash {
    /// Start a new accumulator at `S = 0` for hash subkey `h`.
    pub(crate) fn new(h: [u8; 16]) -> Self {
        Self { h, s: [0; 16] }
    }

    /// Absorb `data`, split into 16-byte blocks with the final partial block
    /// zero-padded on the right. A zero-length `data` is a no-op.
    ///
    /// For each block $B_i$: $S \leftarrow \mathrm{GF\_mul}(S \oplus B_i, H)$.
    pub(crate) fn update(&mut self, data: &[u8]) {
        let mut chunks = data.chunks_exact(16);
        for block in &mut chunks {
            self.absorb_block(block);
        }

        let remainder = chunks.remainder();
        if !remainder.is_empty() {
            let mut block = [0u8; 16];
            block[..remainder.len()].copy_from_slice(remainder);
            self.absorb_block(&block);
        }
    }

    fn absorb_block(&mut self, block: &[u8]) {
        for (s, b) in self.s.iter_mut().zip(block) {
            *s ^= b;
        }
        self.s = gf_mul(&self.s, &self.h);
    }

    /// Consume the accumulator, returning the final 128-bit GHASH value.
    pub(crate) fn finish(self) -> [u8; 16] {
        self.s
    }
}

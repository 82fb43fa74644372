const STATE_WORDS: usize = 16;
const ROUNDS: usize = 4; // double rounds, i.e. Salsa20/8

/// Applies the Salsa20/8 core to `state` in place.
///
/// This is the reduced-round permutation scrypt builds its block mixing
/// function out of. It is not a cipher on its own and makes no
/// collision-resistance promises; it is only useful as a mixing step.
pub fn salsa20_8(state: &mut [u32; STATE_WORDS]) {
    let input = *state;
    for _ in 0..ROUNDS {
        quarter_round(0, 4, 8, 12, state);
        quarter_round(5, 9, 13, 1, state);
        quarter_round(10, 14, 2, 6, state);
        quarter_round(15, 3, 7, 11, state);
        quarter_round(0, 1, 2, 3, state);
        quarter_round(5, 6, 7, 4, state);
        quarter_round(10, 11, 8, 9, state);
        quarter_round(15, 12, 13, 14, state);
    }
    for (s1, s0) in state.iter_mut().zip(input.iter()) {
        *s1 = s1.wrapping_add(*s0);
    }
}

#[inline]
const fn quarter_round(a: usize, b: usize, c: usize, d: usize, state: &mut [u32; STATE_WORDS]) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

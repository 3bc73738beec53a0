// Copyright 2025 Irreducible Inc.

//! Arithmetic on 32-bit words, modulo 2^32.

/// `(a + b) mod 2^32`.
#[inline(always)]
pub const fn add32(a: u32, b: u32) -> u32 {
	a.wrapping_add(b)
}

/// Circular left rotation of `w` by `n` bits, `0 < n < 32`.
#[inline(always)]
pub const fn rotl32(w: u32, n: u32) -> u32 {
	debug_assert!(n > 0 && n < 32);
	w.rotate_left(n)
}

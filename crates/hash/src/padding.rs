// Copyright 2025 Irreducible Inc.

//! Merkle–Damgård strengthening: `0x80`, zeros up to 56 mod 64, then the 64-bit big-endian
//! message length in bits.

use crate::BLOCK_LEN;

/// First byte appended to every message.
pub const PADDING_START: u8 = 0x80;

/// Size of the trailing bit-length field.
pub const LENGTH_FIELD_LEN: usize = 8;

/// Number of zero bytes between [`PADDING_START`] and the length field for a message of
/// `total_len` bytes.
pub fn zero_padding_len(total_len: u64) -> usize {
	let offset = (total_len.wrapping_add(1) % BLOCK_LEN as u64) as usize;
	(BLOCK_LEN - LENGTH_FIELD_LEN + BLOCK_LEN - offset) % BLOCK_LEN
}

/// Number of bytes appended to a message of `total_len` bytes. Always in `9..=72`.
pub fn padding_len(total_len: u64) -> usize {
	1 + zero_padding_len(total_len) + LENGTH_FIELD_LEN
}

/// Pads `data`, the tail of a message of which `hashed_bytes` bytes have already gone through the
/// compression function.
///
/// Returns `data ∥ 0x80 ∥ 0* ∥ bitlen`, where `bitlen` is `8 * (hashed_bytes + data.len())`
/// modulo 2^64. When `hashed_bytes` is a multiple of [`BLOCK_LEN`], the result is a whole number
/// of blocks.
pub fn pad(hashed_bytes: u64, data: &[u8]) -> Vec<u8> {
	let total_len = hashed_bytes.wrapping_add(data.len() as u64);
	let zeros = zero_padding_len(total_len);

	let mut padded = Vec::with_capacity(data.len() + padding_len(total_len));
	padded.extend_from_slice(data);
	padded.push(PADDING_START);
	padded.resize(padded.len() + zeros, 0);
	padded.extend_from_slice(&total_len.wrapping_mul(8).to_be_bytes());
	padded
}

// Copyright 2025 Irreducible Inc.

use crate::{arith::rotl32, compression::Block};

/// Number of words the compression function consumes per block, one per round.
pub const SCHEDULE_LEN: usize = 80;

/// The 80 words derived from a single block. Scratch data for one compression call.
pub type MessageSchedule = [u32; SCHEDULE_LEN];

/// Expands a block into its message schedule.
///
/// The first 16 words are the block read as big-endian words, every later word is
/// `rotl(x[i-3] ^ x[i-8] ^ x[i-14] ^ x[i-16], 1)`.
pub fn expand(block: &Block) -> MessageSchedule {
	let mut x = [0u32; SCHEDULE_LEN];
	for (word, bytes) in x.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes(bytes.try_into().expect("chunk is 4 bytes"));
	}
	for i in 16..SCHEDULE_LEN {
		x[i] = rotl32(x[i - 3] ^ x[i - 8] ^ x[i - 14] ^ x[i - 16], 1);
	}
	x
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::BLOCK_LEN;

	#[test]
	fn test_leading_words_are_big_endian() {
		let block: Block = std::array::from_fn(|i| i as u8);
		let x = expand(&block);
		assert_eq!(x[0], 0x0001_0203);
		assert_eq!(x[15], 0x3c3d_3e3f);
	}

	#[test]
	fn test_recurrence() {
		let mut block = [0u8; BLOCK_LEN];
		block[3] = 1;
		let x = expand(&block);
		assert_eq!(x[0], 1);
		// x[16] = rotl(x[13] ^ x[8] ^ x[2] ^ x[0], 1)
		assert_eq!(x[16], 2);
		assert_eq!(x[17], 0);
		assert_eq!(x[18], 0);
		// x[19] = rotl(x[16] ^ x[11] ^ x[5] ^ x[3], 1)
		assert_eq!(x[19], 4);
	}

	#[test]
	fn test_zero_block() {
		assert_eq!(expand(&[0u8; BLOCK_LEN]), [0u32; SCHEDULE_LEN]);
	}
}

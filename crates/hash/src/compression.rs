// Copyright 2024-2025 Irreducible Inc.

use mdext_utils::ensure;

use crate::{
	arith::{add32, rotl32},
	schedule::{expand, SCHEDULE_LEN},
	state::HashState,
	Error,
};

/// Size of a message block in bytes.
pub const BLOCK_LEN: usize = 64;

/// One message block, the unit the compression function works on.
pub type Block = [u8; BLOCK_LEN];

const ROUNDS_PER_STAGE: usize = 20;

/// Boolean function and additive constant used by a stage of 20 rounds.
#[derive(Clone, Copy)]
struct Stage {
	f: fn(u32, u32, u32) -> u32,
	k: u32,
}

fn choose(b: u32, c: u32, d: u32) -> u32 {
	(b & c) | (!b & d)
}

fn parity(b: u32, c: u32, d: u32) -> u32 {
	b ^ c ^ d
}

fn majority(b: u32, c: u32, d: u32) -> u32 {
	(b & c) | (b & d) | (c & d)
}

/// Stage `j` covers rounds `20 * j..20 * (j + 1)`.
const STAGES: [Stage; SCHEDULE_LEN / ROUNDS_PER_STAGE] = [
	Stage {
		f: choose,
		k: 0x5a82_7999,
	},
	Stage {
		f: parity,
		k: 0x6ed9_eba1,
	},
	Stage {
		f: majority,
		k: 0x8f1b_bcdc,
	},
	Stage {
		f: parity,
		k: 0xca62_c1d6,
	},
];

/// Compresses one block into `state`, returning the new chaining state.
///
/// Fails with [`Error::InvalidBlockLength`] unless `block` is exactly [`BLOCK_LEN`] bytes long.
pub fn compress(block: &[u8], state: HashState) -> Result<HashState, Error> {
	ensure!(block.len() == BLOCK_LEN, Error::InvalidBlockLength { len: block.len() });
	let block: &Block = block.try_into().expect("length checked above");
	Ok(compress_block(block, state))
}

/// Compression function for a block whose length is already guaranteed by its type.
pub fn compress_block(block: &Block, state: HashState) -> HashState {
	let x = expand(block);
	let h = state.words();
	let [mut a, mut b, mut c, mut d, mut e] = h;

	for (i, &word) in x.iter().enumerate() {
		let Stage { f, k } = STAGES[i / ROUNDS_PER_STAGE];
		let t = add32(add32(add32(rotl32(a, 5), f(b, c, d)), e), add32(word, k));
		(a, b, c, d, e) = (t, a, rotl32(b, 30), c, d);
	}

	HashState::new([
		add32(h[0], a),
		add32(h[1], b),
		add32(h[2], c),
		add32(h[3], d),
		add32(h[4], e),
	])
}

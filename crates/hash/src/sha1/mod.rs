// Copyright 2024-2025 Irreducible Inc.

mod digest;

use std::cmp;

use mdext_utils::ensure;
use tracing::instrument;

use crate::{
	compression::{compress_block, Block, BLOCK_LEN},
	padding::pad,
	state::{HashState, DIGEST_LEN},
	Error,
};

/// Streaming SHA-1 hasher.
///
/// Holds the chaining state, up to 63 bytes of input that do not yet form a full block, and the
/// number of bytes that have gone through the compression function. Finalizing is
/// non-destructive: [`Sha1::finalize`], [`Sha1::digest`] and [`Sha1::hexdigest`] take `&self`,
/// and updating afterwards continues as if no digest had been requested.
#[derive(Debug, Clone)]
pub struct Sha1 {
	state: HashState,
	buffer: Block,
	filled_bytes: usize,
	hashed_bytes: u64,
}

impl Default for Sha1 {
	fn default() -> Self {
		Self {
			state: HashState::INITIAL,
			buffer: [0; BLOCK_LEN],
			filled_bytes: 0,
			hashed_bytes: 0,
		}
	}
}

impl Sha1 {
	pub fn new() -> Self {
		Self::default()
	}

	/// A hasher that continues from `state`, as if `hashed_bytes` bytes had already been
	/// compressed into it.
	///
	/// Only whole blocks reach the compression function, so `hashed_bytes` must be a multiple of
	/// [`BLOCK_LEN`]; anything else is rejected with [`Error::UnalignedCounter`].
	pub fn resume(state: HashState, hashed_bytes: u64) -> Result<Self, Error> {
		ensure!(hashed_bytes % BLOCK_LEN as u64 == 0, Error::UnalignedCounter { hashed_bytes });
		Ok(Self {
			state,
			hashed_bytes,
			..Self::default()
		})
	}

	/// A hasher seeded with the chaining state encoded in a hex digest. The byte counter starts
	/// at zero; use [`Sha1::resume`] to also account for the length of the unknown input.
	pub fn from_hex_digest(hex_digest: &str) -> Result<Self, Error> {
		Self::resume(HashState::from_hex(hex_digest)?, 0)
	}

	/// Current chaining state. Does not include the buffered tail.
	pub fn state(&self) -> HashState {
		self.state
	}

	/// Number of bytes that went through the compression function so far.
	pub fn hashed_bytes(&self) -> u64 {
		self.hashed_bytes
	}

	/// Input waiting for a full block.
	pub fn buffered(&self) -> &[u8] {
		&self.buffer[..self.filled_bytes]
	}

	/// Absorbs `data`, compressing every block that becomes complete.
	///
	/// Chunking does not matter: any sequence of updates whose concatenation is `m` leaves the
	/// hasher in the same state as a single `update(m)`.
	pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
		let mut data = data.as_ref();

		if self.filled_bytes != 0 {
			let to_copy = cmp::min(data.len(), BLOCK_LEN - self.filled_bytes);
			self.buffer[self.filled_bytes..self.filled_bytes + to_copy]
				.copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.filled_bytes += to_copy;

			if self.filled_bytes == BLOCK_LEN {
				let block = self.buffer;
				self.absorb(&block);
				self.filled_bytes = 0;
			}
		}

		let mut chunks = data.chunks_exact(BLOCK_LEN);
		for chunk in &mut chunks {
			self.absorb(chunk.try_into().expect("chunk is 64 bytes"));
		}

		let remaining = chunks.remainder();
		if !remaining.is_empty() {
			self.buffer[..remaining.len()].copy_from_slice(remaining);
			self.filled_bytes = remaining.len();
		}

		self
	}

	/// Builder-style [`Sha1::update`].
	#[must_use]
	pub fn chain_update(mut self, data: impl AsRef<[u8]>) -> Self {
		self.update(data);
		self
	}

	fn absorb(&mut self, block: &Block) {
		self.state = compress_block(block, self.state);
		self.hashed_bytes = self.hashed_bytes.wrapping_add(BLOCK_LEN as u64);
	}

	/// Pads the buffered tail and compresses it into a copy of the chaining state.
	///
	/// The hasher itself is left untouched.
	#[instrument(
		level = "trace",
		skip_all,
		fields(hashed_bytes = self.hashed_bytes, buffered = self.filled_bytes)
	)]
	pub fn finalize(&self) -> HashState {
		pad(self.hashed_bytes, self.buffered())
			.chunks_exact(BLOCK_LEN)
			.fold(self.state, |state, block| {
				compress_block(block.try_into().expect("padding is block aligned"), state)
			})
	}

	/// Big-endian serialization of [`Sha1::finalize`].
	pub fn digest(&self) -> [u8; DIGEST_LEN] {
		self.finalize().to_bytes()
	}

	/// Lowercase hex rendering of [`Sha1::finalize`].
	pub fn hexdigest(&self) -> String {
		self.finalize().to_hex()
	}
}

/// One-shot SHA-1 of `data`.
pub fn sha1(data: impl AsRef<[u8]>) -> [u8; DIGEST_LEN] {
	Sha1::new().chain_update(data).digest()
}

/// One-shot SHA-1 of `data`, as lowercase hex.
pub fn sha1_hex(data: impl AsRef<[u8]>) -> String {
	Sha1::new().chain_update(data).hexdigest()
}

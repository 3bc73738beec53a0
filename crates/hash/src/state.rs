// Copyright 2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use crate::{DigestEncodingError, Error};

/// Number of 32-bit words in the chaining state.
pub const STATE_WORDS: usize = 5;

/// Size of a binary digest in bytes.
pub const DIGEST_LEN: usize = STATE_WORDS * 4;

/// Size of a textual digest in hex characters.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// The five-word chaining value `h0..h4`.
///
/// A digest is exactly this state serialized big-endian, which is what makes a published digest
/// resumable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashState([u32; STATE_WORDS]);

impl HashState {
	/// Standard initialization constants.
	pub const INITIAL: Self =
		Self([0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0]);

	pub const fn new(words: [u32; STATE_WORDS]) -> Self {
		Self(words)
	}

	pub const fn words(&self) -> [u32; STATE_WORDS] {
		self.0
	}

	pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
		let mut out = [0u8; DIGEST_LEN];
		for (chunk, word) in out.chunks_exact_mut(4).zip(self.0) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}
		out
	}

	pub fn from_bytes(bytes: &[u8; DIGEST_LEN]) -> Self {
		let mut words = [0u32; STATE_WORDS];
		for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
			*word = u32::from_be_bytes(chunk.try_into().expect("chunk is 4 bytes"));
		}
		Self(words)
	}

	/// Lowercase hex rendering, 8 characters per word, `h0` first.
	pub fn to_hex(&self) -> String {
		format!("{self:x}")
	}

	/// Parses a 40-character hex digest back into the chaining state it was serialized from.
	///
	/// Both lowercase and uppercase digits are accepted. Anything that does not decode to
	/// exactly five big-endian words is rejected with [`Error::InvalidDigestEncoding`].
	pub fn from_hex(hex_digest: &str) -> Result<Self, Error> {
		let mut bytes = [0u8; DIGEST_LEN];
		hex::decode_to_slice(hex_digest, &mut bytes).map_err(|err| match err {
			hex::FromHexError::InvalidHexCharacter { c, index } => {
				DigestEncodingError::NonHexCharacter { c, index }
			}
			_ => DigestEncodingError::WrongLength {
				len: hex_digest.len(),
			},
		})?;
		Ok(Self::from_bytes(&bytes))
	}
}

impl Default for HashState {
	fn default() -> Self {
		Self::INITIAL
	}
}

impl From<[u32; STATE_WORDS]> for HashState {
	fn from(words: [u32; STATE_WORDS]) -> Self {
		Self(words)
	}
}

impl From<HashState> for [u8; DIGEST_LEN] {
	fn from(state: HashState) -> Self {
		state.to_bytes()
	}
}

impl FromStr for HashState {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_hex(s)
	}
}

impl fmt::LowerHex for HashState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for word in self.0 {
			write!(f, "{word:08x}")?;
		}
		Ok(())
	}
}

impl fmt::Display for HashState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(self, f)
	}
}

impl fmt::Debug for HashState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "HashState({self:x})")
	}
}

// Copyright 2024-2025 Irreducible Inc.

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
	/// The compression function was handed something other than one full block.
	#[error("compression function expects a 64-byte block, got {len} bytes")]
	InvalidBlockLength { len: usize },
	/// A hasher can only resume after whole blocks have been compressed.
	#[error("resumed byte counter {hashed_bytes} is not a multiple of 64")]
	UnalignedCounter { hashed_bytes: u64 },
	#[error("invalid digest encoding: {0}")]
	InvalidDigestEncoding(#[from] DigestEncodingError),
}

/// Why a textual digest could not be turned back into a [`crate::HashState`].
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum DigestEncodingError {
	#[error("expected 40 hex characters, got {len} bytes")]
	WrongLength { len: usize },
	#[error("non-hex character {c:?} at position {index}")]
	NonHexCharacter { c: char, index: usize },
}

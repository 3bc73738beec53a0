// Copyright 2025 Irreducible Inc.

//! [`digest`] trait implementations, so [`Sha1`] can be used wherever a `digest::Digest` is
//! expected. The consuming and resetting finalizers are thin wrappers around the
//! non-destructive [`Sha1::finalize`].

use core::fmt;

use digest::{
	consts::{U20, U64},
	core_api::{AlgorithmName, BlockSizeUser},
	FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

use super::Sha1;

impl HashMarker for Sha1 {}

impl Update for Sha1 {
	fn update(&mut self, data: &[u8]) {
		Sha1::update(self, data);
	}
}

impl OutputSizeUser for Sha1 {
	type OutputSize = U20;
}

impl BlockSizeUser for Sha1 {
	type BlockSize = U64;
}

impl FixedOutput for Sha1 {
	fn finalize_into(self, out: &mut Output<Self>) {
		out.copy_from_slice(&Sha1::digest(&self));
	}
}

impl Reset for Sha1 {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl FixedOutputReset for Sha1 {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		out.copy_from_slice(&Sha1::digest(self));
		Reset::reset(self);
	}
}

impl AlgorithmName for Sha1 {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Sha1")
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_digest_trait() {
		let out = <Sha1 as Digest>::digest(b"The quick brown fox jumps over the lazy dog");
		assert_eq!(out[..], hex!("2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"));
	}

	#[test]
	fn test_finalize_reset() {
		let mut hasher = <Sha1 as Digest>::new();
		Digest::update(&mut hasher, b"nanana batman");
		let first = Digest::finalize_reset(&mut hasher);
		assert_eq!(first[..], hex!("acc505b782afe56238322ef8f583f4f3686b27ca"));

		assert_eq!(hasher.hashed_bytes(), 0);
		assert!(hasher.buffered().is_empty());
		let empty = Digest::finalize(hasher);
		assert_eq!(empty[..], hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
	}

	#[test]
	fn test_algorithm_name() {
		struct Name;
		impl fmt::Display for Name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				Sha1::write_alg_name(f)
			}
		}
		assert_eq!(Name.to_string(), "Sha1");
	}
}

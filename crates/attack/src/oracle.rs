// Copyright 2025 Irreducible Inc.

use std::fmt;

use mdext_hash::{HashState, Sha1};
use rand::RngCore;
use tracing::trace;

use crate::Error;

/// A MAC computed as `H(secret ∥ message)`, the construction the length-extension attack breaks.
#[derive(Clone)]
pub struct SecretPrefixMac {
	secret: Vec<u8>,
}

impl SecretPrefixMac {
	pub fn new(secret: impl Into<Vec<u8>>) -> Self {
		Self {
			secret: secret.into(),
		}
	}

	/// A MAC keyed with `secret_len` random bytes.
	pub fn random(mut rng: impl RngCore, secret_len: usize) -> Self {
		let mut secret = vec![0u8; secret_len];
		rng.fill_bytes(&mut secret);
		Self { secret }
	}

	pub fn secret_len(&self) -> usize {
		self.secret.len()
	}

	pub fn sign(&self, message: &[u8]) -> HashState {
		Sha1::new()
			.chain_update(&self.secret)
			.chain_update(message)
			.finalize()
	}

	pub fn verify(&self, message: &[u8], tag: &HashState) -> bool {
		let valid = self.sign(message) == *tag;
		trace!(message_len = message.len(), valid, "verified tag");
		valid
	}

	/// Like [`SecretPrefixMac::verify`], for a tag in hex.
	pub fn verify_hex(&self, message: &[u8], tag_hex: &str) -> Result<(), Error> {
		let tag = HashState::from_hex(tag_hex)?;
		if self.verify(message, &tag) {
			Ok(())
		} else {
			Err(Error::TagMismatch)
		}
	}
}

impl fmt::Debug for SecretPrefixMac {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SecretPrefixMac")
			.field("secret_len", &self.secret.len())
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use rand::{rngs::StdRng, SeedableRng};

	use super::*;

	#[test]
	fn test_sign_and_verify() {
		let mac = SecretPrefixMac::new(b"hunter2".to_vec());
		let tag = mac.sign(b"amount=10");
		assert!(mac.verify(b"amount=10", &tag));
		assert!(!mac.verify(b"amount=1000", &tag));
		assert_eq!(mac.verify_hex(b"amount=10", &tag.to_hex()), Ok(()));
		assert_eq!(mac.verify_hex(b"amount=1000", &tag.to_hex()), Err(Error::TagMismatch));
		assert_matches!(mac.verify_hex(b"amount=10", "xyz"), Err(Error::Hash(_)));
	}

	#[test]
	fn test_sign_is_hash_of_concatenation() {
		let mac = SecretPrefixMac::new("nanana ");
		assert_eq!(mac.sign(b"batman").to_hex(), "acc505b782afe56238322ef8f583f4f3686b27ca");
	}

	#[test]
	fn test_random_secret() {
		let mac = SecretPrefixMac::random(StdRng::seed_from_u64(7), 23);
		assert_eq!(mac.secret_len(), 23);
		assert_eq!(format!("{mac:?}"), "SecretPrefixMac { secret_len: 23, .. }");
	}
}

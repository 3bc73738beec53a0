// Copyright 2025 Irreducible Inc.

use rayon::prelude::*;

use crate::{sha1, state::DIGEST_LEN};

/// Hashes independent inputs in parallel, one hasher per input.
///
/// Compression within a single message is a sequential chain, so parallelism only exists across
/// inputs. Output order matches input order.
pub fn sha1_many<D>(inputs: &[D]) -> Vec<[u8; DIGEST_LEN]>
where
	D: AsRef<[u8]> + Sync,
{
	inputs.par_iter().map(sha1).collect()
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, RngCore, SeedableRng};

	use super::*;

	#[test]
	fn test_matches_sequential() {
		let mut rng = StdRng::seed_from_u64(0);
		let inputs = (0..64)
			.map(|i| {
				let mut data = vec![0u8; i * 37];
				rng.fill_bytes(&mut data);
				data
			})
			.collect::<Vec<_>>();

		let expected = inputs.iter().map(sha1).collect::<Vec<_>>();
		assert_eq!(sha1_many(&inputs), expected);
	}

	#[test]
	fn test_empty() {
		assert!(sha1_many::<Vec<u8>>(&[]).is_empty());
	}
}

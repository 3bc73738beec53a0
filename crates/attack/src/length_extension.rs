// Copyright 2025 Irreducible Inc.

use std::ops::RangeInclusive;

use mdext_hash::{pad, HashState, Sha1};
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::Error;

/// A forged digest together with the message it authenticates.
///
/// With `S` the secret prefix and `M` the known suffix, [`Forgery::payload`] is
/// `M ∥ glue ∥ appendix`, where `glue` is the padding a genuine hasher appended to `S ∥ M`.
/// If the assumed prefix length was right, `H(S ∥ payload)` equals [`Forgery::digest`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Forgery {
	prefix_len: usize,
	digest: HashState,
	payload: Vec<u8>,
	known_len: usize,
	appendix_len: usize,
}

impl Forgery {
	/// The secret prefix length this forgery was computed for.
	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	pub fn digest(&self) -> HashState {
		self.digest
	}

	pub fn hex_digest(&self) -> String {
		self.digest.to_hex()
	}

	/// The bytes to submit after the secret prefix, `M ∥ glue ∥ appendix`.
	pub fn payload(&self) -> &[u8] {
		&self.payload
	}

	/// The Merkle–Damgård padding of `S ∥ M`, which ends up inside the forged message.
	pub fn glue_padding(&self) -> &[u8] {
		&self.payload[self.known_len..self.payload.len() - self.appendix_len]
	}

	pub fn appendix(&self) -> &[u8] {
		&self.payload[self.payload.len() - self.appendix_len..]
	}

	pub fn into_payload(self) -> Vec<u8> {
		self.payload
	}
}

/// Forges the digest of `S ∥ known_suffix ∥ glue ∥ appendix` from `known_digest_hex`, the
/// digest of `S ∥ known_suffix` for a secret `S` of `prefix_len` bytes.
///
/// The secret itself is never needed: the published digest is the complete chaining state, so
/// hashing can simply resume from it. Only the length of `S` has to be right, since it is baked
/// into the padding.
#[instrument(
	skip_all,
	fields(prefix_len = prefix_len, known_len = known_suffix.len(), appendix_len = appendix.len())
)]
pub fn extend(
	known_digest_hex: &str,
	known_suffix: &[u8],
	appendix: &[u8],
	prefix_len: usize,
) -> Result<Forgery, Error> {
	let state = HashState::from_hex(known_digest_hex)?;
	Ok(extend_from_state(state, known_suffix, appendix, prefix_len))
}

/// [`extend`] for a digest that has already been decoded.
pub fn extend_from_state(
	state: HashState,
	known_suffix: &[u8],
	appendix: &[u8],
	prefix_len: usize,
) -> Forgery {
	let mut payload = pad(prefix_len as u64, known_suffix);
	// `S ∥ M ∥ glue` is block aligned and has been fully compressed into `state`.
	let hashed_bytes = (prefix_len as u64).wrapping_add(payload.len() as u64);

	let digest = Sha1::resume(state, hashed_bytes)
		.expect("padding leaves the forged prefix block aligned")
		.chain_update(appendix)
		.finalize();
	payload.extend_from_slice(appendix);

	debug!(%digest, payload_len = payload.len(), "forged digest");

	Forgery {
		prefix_len,
		digest,
		payload,
		known_len: known_suffix.len(),
		appendix_len: appendix.len(),
	}
}

/// One forgery per candidate secret length, for when the length is not known.
///
/// Forgeries are returned in ascending `prefix_len` order; an empty range yields none.
#[instrument(skip_all, fields(lengths = ?lengths))]
pub fn extend_range(
	known_digest_hex: &str,
	known_suffix: &[u8],
	appendix: &[u8],
	lengths: RangeInclusive<usize>,
) -> Result<Vec<Forgery>, Error> {
	let state = HashState::from_hex(known_digest_hex)?;
	Ok(lengths
		.into_par_iter()
		.map(|prefix_len| extend_from_state(state, known_suffix, appendix, prefix_len))
		.collect())
}

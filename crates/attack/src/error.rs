// Copyright 2025 Irreducible Inc.

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
	#[error("the tag does not authenticate the message")]
	TagMismatch,
	#[error(transparent)]
	Hash(#[from] mdext_hash::Error),
}

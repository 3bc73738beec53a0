// Copyright 2023-2025 Irreducible Inc.

//! A streaming SHA-1 engine whose chaining state can be exported, re-imported and resumed.
//!
//! Unlike most hash APIs, finalizing a [`Sha1`] does not consume or reset it: the digest is
//! recomputed from the current chaining state and buffered tail every time it is requested, and
//! the hasher keeps accepting input afterwards. Since the digest *is* the chaining state,
//! [`HashState::from_hex`] turns any published digest back into a resumable state.

pub mod arith;
pub mod compression;
mod error;
pub mod padding;
pub mod parallel;
pub mod schedule;
pub mod sha1;
pub mod state;

pub use compression::{compress, compress_block, Block, BLOCK_LEN};
pub use digest;
pub use error::*;
pub use padding::pad;
pub use parallel::sha1_many;
pub use sha1::*;
pub use state::*;

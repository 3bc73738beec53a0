// Copyright 2025 Irreducible Inc.

//! Length-extension forgery against the secret-prefix construction `H(secret ∥ message)`.

mod error;
mod length_extension;
mod oracle;

pub use error::*;
pub use length_extension::*;
pub use oracle::*;

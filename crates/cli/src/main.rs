// Copyright 2025 Irreducible Inc.

use anyhow::{anyhow, ensure, Context, Result};
use clap::{Parser, Subcommand};
use mdext_attack::{extend, extend_range, Forgery, SecretPrefixMac};
use mdext_hash::sha1_hex;
use mdext_utils::{rayon::adjust_thread_pool, tracing::init_tracing};
use rand::thread_rng;

/// SHA-1 and the length-extension attack on `SHA1(secret ∥ message)`.
#[derive(Debug, Parser)]
#[command(name = "mdext", version)]
struct Args {
	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Print the SHA-1 digest of DATA.
	Hash {
		/// Input, hashed as its UTF-8 bytes.
		data: String,
	},
	/// Forge a digest for `secret ∥ PAYLOAD ∥ padding ∥ APPENDIX`.
	Extend {
		/// Digest of `secret ∥ PAYLOAD`, 40 hex characters.
		hexdigest: String,
		/// The known part of the signed message.
		payload: String,
		/// Data to append.
		appendix: String,
		/// Length of the unknown secret prefix in bytes.
		prefix_len: usize,
		/// Also forge for every length up to this one, when PREFIX_LEN is only a lower bound.
		#[arg(long)]
		max_prefix_len: Option<usize>,
	},
	/// Sign a message with a random secret, forge an extension and check the forgery.
	Demo {
		/// Length of the random secret in bytes.
		#[arg(long, default_value_t = 16)]
		secret_len: usize,
		#[arg(long, default_value = "user=guest")]
		payload: String,
		#[arg(long, default_value = ";admin=true")]
		appendix: String,
	},
}

fn print_forgery(forgery: &Forgery) {
	println!("[+] new hashsum: {}", forgery.hex_digest());
	println!("[+] new payload: b\"{}\"", forgery.payload().escape_ascii());
}

/// Upper bound on the number of forgeries a single `extend --max-prefix-len` run builds.
const MAX_PREFIX_CANDIDATES: usize = 4096;

fn main() -> Result<()> {
	adjust_thread_pool()
		.as_ref()
		.map_err(|err| anyhow!("failed to init thread pool: {err}"))?;

	let args = Args::parse();

	init_tracing();
	tracing::debug!(?args, "parsed arguments");

	run(args.command)
}

fn run(command: Command) -> Result<()> {
	match command {
		Command::Hash { data } => println!("{}", sha1_hex(data)),
		Command::Extend {
			hexdigest,
			payload,
			appendix,
			prefix_len,
			max_prefix_len,
		} => match max_prefix_len {
			None => {
				let forgery =
					extend(&hexdigest, payload.as_bytes(), appendix.as_bytes(), prefix_len)
						.context("cannot extend the given digest")?;
				print_forgery(&forgery);
			}
			Some(max_prefix_len) => {
				ensure!(
					max_prefix_len >= prefix_len,
					"--max-prefix-len ({max_prefix_len}) is below PREFIX_LEN ({prefix_len})"
				);
				ensure!(
					max_prefix_len - prefix_len < MAX_PREFIX_CANDIDATES,
					"--max-prefix-len allows at most {MAX_PREFIX_CANDIDATES} candidate lengths"
				);
				let forgeries = extend_range(
					&hexdigest,
					payload.as_bytes(),
					appendix.as_bytes(),
					prefix_len..=max_prefix_len,
				)
				.context("cannot extend the given digest")?;
				for forgery in &forgeries {
					println!("[*] prefix length {}", forgery.prefix_len());
					print_forgery(forgery);
				}
			}
		},
		Command::Demo {
			secret_len,
			payload,
			appendix,
		} => {
			let mac = SecretPrefixMac::random(thread_rng(), secret_len);
			let tag = mac.sign(payload.as_bytes());
			println!("[*] secret of {secret_len} bytes signed {payload:?}: {tag}");

			let forgery =
				extend(&tag.to_hex(), payload.as_bytes(), appendix.as_bytes(), secret_len)?;
			print_forgery(&forgery);

			mac.verify_hex(forgery.payload(), &forgery.hex_digest())
				.context("forged tag was rejected")?;
			println!("[+] forged tag accepted");
		}
	}

	Ok(())
}

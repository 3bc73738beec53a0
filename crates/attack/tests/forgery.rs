// Copyright 2025 Irreducible Inc.

use hex_literal::hex;
use mdext_attack::{extend, extend_range, Error, SecretPrefixMac};
use mdext_hash::{sha1, sha1_hex, HashState};
use proptest::prelude::*;

#[test]
fn test_forgery_accepted_by_oracle() {
	let mac = SecretPrefixMac::new(b"0123456789abcdef0123".to_vec());
	let message = b"user=guest&role=reader";
	let tag = mac.sign(message);

	let forgery = extend(&tag.to_hex(), message, b"&role=admin", mac.secret_len()).unwrap();
	assert!(forgery.payload().ends_with(b"&role=admin"));
	assert!(mac.verify(forgery.payload(), &forgery.digest()));
	assert_eq!(mac.verify_hex(forgery.payload(), &forgery.hex_digest()), Ok(()));
}

#[test]
fn test_only_the_right_length_verifies() {
	let mac = SecretPrefixMac::new(b"s3cr3t".to_vec());
	let message = b"count=1";
	let tag = mac.sign(message).to_hex();

	let forgeries = extend_range(&tag, message, b";count=9", 0..=32).unwrap();
	let accepted = forgeries
		.iter()
		.filter(|forgery| mac.verify(forgery.payload(), &forgery.digest()))
		.map(|forgery| forgery.prefix_len())
		.collect::<Vec<_>>();
	assert_eq!(accepted, vec![mac.secret_len()]);
}

#[test]
fn test_nanana_batman_extension() {
	// "nanana " is the secret, "batman" the known suffix
	let known = "acc505b782afe56238322ef8f583f4f3686b27ca";
	let forgery = extend(known, b"batman", b"!", 7).unwrap();

	let mut expected_payload = b"batman".to_vec();
	expected_payload.push(0x80);
	expected_payload.extend_from_slice(&[0; 42]);
	expected_payload.extend_from_slice(&hex!("0000000000000068"));
	expected_payload.push(b'!');
	assert_eq!(forgery.payload(), &expected_payload[..]);

	assert_eq!(
		forgery.hex_digest(),
		sha1_hex([&b"nanana "[..], &expected_payload[..]].concat())
	);
}

#[test]
fn test_rejected_digest() {
	let mac = SecretPrefixMac::new(b"key".to_vec());
	let forgery = extend(&sha1_hex(b"unrelated"), b"msg", b"more", 3).unwrap();
	assert_eq!(
		mac.verify_hex(forgery.payload(), &forgery.hex_digest()),
		Err(Error::TagMismatch)
	);
}

proptest! {
	#[test]
	fn test_extension_for_any_secret(
		secret in prop::collection::vec(any::<u8>(), 0..150),
		known in prop::collection::vec(any::<u8>(), 0..150),
		appendix in prop::collection::vec(any::<u8>(), 0..200),
	) {
		let known_digest = sha1([&secret[..], &known[..]].concat());
		let forgery = extend(
			&HashState::from_bytes(&known_digest).to_hex(),
			&known,
			&appendix,
			secret.len(),
		)
		.unwrap();

		let forged_message = [&secret[..], forgery.payload()].concat();
		prop_assert_eq!(forgery.digest().to_bytes(), sha1(&forged_message));
		prop_assert_eq!(
			[&secret[..], &known[..], forgery.glue_padding(), &appendix[..]].concat(),
			forged_message
		);
	}
}

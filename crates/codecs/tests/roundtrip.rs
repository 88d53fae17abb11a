//! Round trips through every format that has both an encoder and a decoder.

use std::io::{Read, Write};

use binrecode_codecs::{DecodeFormat, EncodeFormat, Encoder};
use proptest::prelude::*;
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=300);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

fn encode(format: EncodeFormat, data: &[u8]) -> Vec<u8> {
    // Uneven writes to exercise carry-over between calls.
    encode_in_chunks(format, data, 5)
}

fn encode_in_chunks(format: EncodeFormat, data: &[u8], chunk_len: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = format.encoder(&mut out).unwrap();
    for chunk in data.chunks(chunk_len) {
        enc.write_all(chunk).unwrap();
    }
    enc.finish().unwrap();
    drop(enc);
    out
}

fn decode(format: DecodeFormat, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    format.decoder(data).read_to_end(&mut out).unwrap();
    out
}

#[test]
fn works() {
    for decode_format in DecodeFormat::ALL {
        let encode_format: EncodeFormat = decode_format.name().parse().unwrap();
        for _ in 0..50 {
            let blob = generate_blob();
            let encoded = encode(encode_format, &blob);
            assert_eq!(
                decode(decode_format, &encoded),
                blob,
                "{decode_format} failed for blob of length {}",
                blob.len()
            );
        }
    }
}

#[test]
fn encoders_match_reference_base64() {
    use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
    use base64::Engine;

    for _ in 0..50 {
        let blob = generate_blob();
        let cases = [
            ("base64", STANDARD.encode(&blob)),
            ("base64raw", STANDARD_NO_PAD.encode(&blob)),
            ("base64url", URL_SAFE.encode(&blob)),
            ("base64urlraw", URL_SAFE_NO_PAD.encode(&blob)),
        ];
        for (name, expected) in cases {
            let format: EncodeFormat = name.parse().unwrap();
            assert_eq!(String::from_utf8(encode(format, &blob)).unwrap(), expected);
        }
    }
}

#[test]
fn hex_is_two_lowercase_digits_per_byte() {
    let blob = generate_blob();
    let encoded = encode(EncodeFormat::Hex, &blob);
    assert_eq!(encoded.len(), blob.len() * 2);
    assert!(encoded
        .iter()
        .all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(c)));
}

#[test]
fn prefixed_hex_is_hex_after_prefix() {
    let blob = generate_blob();
    let encoded = encode(EncodeFormat::PrefixedHex, &blob);
    assert_eq!(&encoded[..2], b"0x");
    assert_eq!(&encoded[2..], &encode(EncodeFormat::Hex, &blob)[..]);
}

proptest! {
    #[test]
    fn any_write_split_round_trips(
        data in proptest::collection::vec(any::<u8>(), 0..256),
        chunk_len in 1usize..16,
        index in 0..DecodeFormat::ALL.len(),
    ) {
        let decode_format = DecodeFormat::ALL[index];
        let encode_format: EncodeFormat = decode_format.name().parse().unwrap();
        let encoded = encode_in_chunks(encode_format, &data, chunk_len);
        prop_assert_eq!(decode(decode_format, &encoded), data);
    }
}

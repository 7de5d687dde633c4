//! Tests for base64 encoding.

use base64_codec::{encode, encode_standard, Variant};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn known_vectors() {
    assert_eq!(encode_standard(b"Man"), "TWFu");
    assert_eq!(encode_standard(b"Ma"), "TWE=");
    assert_eq!(encode_standard(b"M"), "TQ==");
    assert_eq!(encode_standard(b"hello world"), "aGVsbG8gd29ybGQ=");
    assert_eq!(encode_standard(b""), "");
}

#[test]
fn output_length_law() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob, Variant::Standard);
        assert_eq!(encoded.len(), blob.len().div_ceil(3) * 4);

        let pads = encoded.bytes().rev().take_while(|&b| b == b'=').count();
        assert_eq!(pads, (3 - blob.len() % 3) % 3);
    }
}

#[test]
fn output_is_restricted_to_the_alphabet() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob, Variant::Standard);
        for c in encoded.chars() {
            assert!(
                c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=',
                "unexpected character: {}",
                c
            );
        }
    }
}

use huffman_text_coding::{CodingError, HuffmanCoder};
use proptest::prelude::*;

fn coder_for(text: &[u8]) -> HuffmanCoder {
    HuffmanCoder::from_source(text).unwrap()
}

proptest! {
    #[test]
    fn round_trip_on_own_source(text in prop::collection::vec(any::<u8>(), 0..300)) {
        let coder = coder_for(&text);
        let encoded = coder.encode(text.as_slice()).unwrap();
        prop_assert!(encoded.bytes().all(|b| b == b'0' || b == b'1'));
        prop_assert_eq!(coder.decode(&encoded).unwrap(), text);
    }

    #[test]
    fn round_trip_on_sub_alphabet(
        source in "[a-e\n]{1,80}",
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..60),
    ) {
        let coder = coder_for(source.as_bytes());
        let alphabet: Vec<u8> = coder.code_table().keys().copied().collect();
        let text: Vec<u8> = picks.iter().map(|i| alphabet[i.index(alphabet.len())]).collect();

        let encoded = coder.encode(text.as_slice()).unwrap();
        prop_assert_eq!(coder.decode(&encoded).unwrap(), text);
    }

    #[test]
    fn codes_are_prefix_free(text in prop::collection::vec(any::<u8>(), 1..300)) {
        let coder = coder_for(&text);
        let codes: Vec<&String> = coder.code_table().values().collect();
        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a.as_str()), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn every_symbol_gets_a_code(text in "[ -~\n]{0,200}") {
        let coder = coder_for(text.as_bytes());
        prop_assert_eq!(coder.code_table().len(), coder.alphabet_len());
        for (&byte, &count) in coder.frequencies() {
            prop_assert!(count >= 1);
            prop_assert!(!coder.get_character_code(byte).is_empty());
        }
    }

    #[test]
    fn building_is_deterministic(text in prop::collection::vec(any::<u8>(), 0..300)) {
        let first = coder_for(&text);
        let second = coder_for(&text);
        prop_assert_eq!(first.code_table(), second.code_table());
    }

    #[test]
    fn rejects_non_bits(text in "[a-z]{2,40}", junk in "[2-9a-z]") {
        let coder = coder_for(text.as_bytes());
        let mut encoded = coder.encode(text.as_bytes()).unwrap();
        encoded.push_str(&junk);
        let is_invalid = matches!(coder.decode(&encoded), Err(CodingError::InvalidBit { .. }));
        prop_assert!(is_invalid);
    }
}

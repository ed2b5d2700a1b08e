//! Integration tests for the decoder through the facade crate

use old_phone_pad::core::{key_mapping, letter_from_key, process, process_optional, DecodeError};

fn decode(input: &str) -> String {
    process(input).unwrap_or_else(|e| panic!("{input:?} failed: {e}"))
}

fn assert_table(cases: &[(&str, &str)]) {
    for (input, expected) in cases {
        assert_eq!(decode(input), *expected, "input {input:?}");
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(decode("33#"), "E");
    assert_eq!(decode("227*#"), "B");
    assert_eq!(decode("4433555 555666#"), "HELLO");
    assert_eq!(decode("8 88777444666*664#"), "TURING");
}

#[test]
fn test_single_key_presses() {
    assert_table(&[
        ("2#", "A"),
        ("22#", "B"),
        ("222#", "C"),
        ("2222#", "A"),
        ("3#", "D"),
        ("33#", "E"),
        ("333#", "F"),
        ("4#", "G"),
        ("44#", "H"),
        ("444#", "I"),
        ("5#", "J"),
        ("55#", "K"),
        ("555#", "L"),
        ("6#", "M"),
        ("66#", "N"),
        ("666#", "O"),
        ("7#", "P"),
        ("77#", "Q"),
        ("777#", "R"),
        ("7777#", "S"),
        ("8#", "T"),
        ("88#", "U"),
        ("888#", "V"),
        ("9#", "W"),
        ("99#", "X"),
        ("999#", "Y"),
        ("9999#", "Z"),
    ]);
}

#[test]
fn test_key_cycling() {
    assert_table(&[
        ("2222#", "A"),
        ("3333#", "D"),
        ("4444#", "G"),
        ("5555#", "J"),
        ("6666#", "M"),
        ("77777#", "P"),
        ("8888#", "T"),
        ("99999#", "W"),
    ]);
}

#[test]
fn test_pause_between_same_keys() {
    assert_table(&[
        ("2 2#", "AA"),
        ("22 22#", "BB"),
        ("3 3#", "DD"),
        ("4 4#", "GG"),
        ("5 5#", "JJ"),
        ("6 6#", "MM"),
        ("7 7#", "PP"),
        ("8 8#", "TT"),
        ("9 9#", "WW"),
    ]);
    // Without the pause the presses cycle instead.
    assert_eq!(decode("22#"), "B");
}

#[test]
fn test_different_keys() {
    assert_table(&[
        ("2 3#", "AD"),
        ("22 33#", "BE"),
        ("2 3 4#", "ADG"),
        ("22 33 44#", "BEH"),
        ("2 3 4 5#", "ADGJ"),
        ("22 33 44 55#", "BEHK"),
    ]);
}

#[test]
fn test_complex_pause_patterns() {
    assert_table(&[
        ("2 2 2#", "AAA"),
        ("22 22 22#", "BBB"),
        ("2 22 222#", "ABC"),
        ("22 2 22#", "BAB"),
    ]);
}

#[test]
fn test_backspace() {
    assert_table(&[
        ("2*#", ""),
        ("22*#", ""),
        ("23*#", "A"),
        ("2*2#", "A"),
        ("22*22#", "B"),
        // 2 -> A, 3 -> D, * removes D, 2 -> A, 3 -> D
        ("23*23#", "AAD"),
        ("*2#", "A"),
        ("22*33#", "E"),
    ]);
}

#[test]
fn test_multiple_backspaces() {
    assert_table(&[
        ("2*2*#", ""),
        ("22*22*#", ""),
        ("2*2*2#", "A"),
        ("22*22*22#", "B"),
    ]);
}

#[test]
fn test_inputs_with_nothing_to_decode() {
    assert_table(&[("#", ""), ("*#", ""), ("   #", ""), ("1#", ""), ("0 1 *#", "")]);
}

#[test]
fn test_terminator_truncates() {
    assert_eq!(decode("2#3#"), "A");
}

#[test]
fn test_rejected_inputs() {
    assert_eq!(process(""), Err(DecodeError::EmptyInput));
    assert_eq!(process_optional(None), Err(DecodeError::EmptyInput));
    assert_eq!(process("22"), Err(DecodeError::MissingTerminator));

    for input in ["", "22", "#2"] {
        let err = process(input).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}

#[test]
fn test_key_mapping() {
    let mapping = key_mapping();
    assert_eq!(mapping.len(), 8);
    let pairs: Vec<(char, &str)> = mapping.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ('2', "ABC"),
            ('3', "DEF"),
            ('4', "GHI"),
            ('5', "JKL"),
            ('6', "MNO"),
            ('7', "PQRS"),
            ('8', "TUV"),
            ('9', "WXYZ"),
        ]
    );
}

#[test]
fn test_letter_from_unmapped_key() {
    assert_eq!(letter_from_key('1', 1), None);
    assert_eq!(letter_from_key('#', 1), None);
}

#[test]
fn test_concurrent_decoding() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..200)
                    .map(|_| process("4433555 555666#").unwrap())
                    .all(|m| m == "HELLO")
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

//! Encoding property tests

use vla_smiles_core::{encode, VlaError};

use super::helpers::{drug_batch, expand_bits};

#[test]
fn test_every_row_has_common_length() {
    let batch = drug_batch();
    let encoded = encode(&batch).unwrap();
    let longest = batch.iter().map(|s| s.chars().count()).max().unwrap();

    assert_eq!(encoded.len(), batch.len());
    assert_eq!(encoded.sequence_length(), 8 * longest);
    for row in encoded.rows() {
        assert_eq!(row.len(), encoded.sequence_length());
    }
}

#[test]
fn test_prefix_is_expansion_and_suffix_is_padding() {
    let batch = drug_batch();
    let encoded = encode(&batch).unwrap();

    for (i, raw) in batch.iter().enumerate() {
        let expected = expand_bits(raw);
        let row = &encoded.rows()[i];
        assert_eq!(&row[..expected.len()], expected, "row {} prefix", i);
        assert!(
            row[expected.len()..].chars().all(|c| c == '0'),
            "row {} padding",
            i
        );
        assert_eq!(encoded.content_bits(i), Some(expected.len()));
    }
}

#[test]
fn test_duplicate_rows_encode_identically() {
    let encoded = encode(&["CCO", "CCO", "C"]).unwrap();
    assert_eq!(encoded.rows()[0], encoded.rows()[1]);
}

#[test]
fn test_out_of_range_character_fails_whole_batch() {
    let err = encode(&["CCO", "C\u{1F600}"]).unwrap_err();
    assert!(err.is_input_error());
    assert!(matches!(err, VlaError::EncodingRange { row: 1, .. }));
}

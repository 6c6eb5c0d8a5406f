//! Integration tests for the combinator layer: lists, tuples, mappings,
//! and incremental consumption of a shared input.

use numform::{
    Codec, CountRange, Error, FloatCodec, IdentityCodec, IncrementalCodec, ListCodec,
    MappingCodec, NumberCodec, ParseableCodec, TupleCodec,
};

#[test]
fn test_list_round_trip() {
    let codec = ListCodec::new(FloatCodec::new());
    assert_eq!(codec.format(&vec![1.1, 2.2, 3.3, 4.4]), "1.1, 2.2, 3.3, 4.4");
    assert_eq!(
        codec.parse("1.1, 2.2, 3.3, 4.4").unwrap(),
        vec![1.1, 2.2, 3.3, 4.4]
    );
}

#[test]
fn test_list_count_enforcement() {
    let codec = ListCodec::new(NumberCodec::<i32>::new()).with_count(CountRange::exactly(3));
    assert_eq!(codec.parse("1,2,3").unwrap(), vec![1, 2, 3]);
    assert_eq!(codec.parse("1,2,3,4,5").unwrap_err(), Error::count(3, 3, 5));
    assert_eq!(codec.parse("1,2").unwrap_err(), Error::count(3, 3, 2));
}

#[test]
fn test_list_empty_input_is_one_empty_element() {
    // The split policy: "" is one empty field, not zero fields, so the
    // element codec sees it and fails. Length-0 collections do not round-trip.
    let numbers = ListCodec::new(NumberCodec::<i32>::new());
    assert!(matches!(numbers.parse(""), Err(Error::Parse { .. })));

    // With an element codec that accepts "", the same input is one element.
    let strings = ListCodec::new(IdentityCodec);
    assert_eq!(strings.parse("").unwrap(), vec![String::new()]);
}

#[test]
fn test_incremental_parse_leaves_exact_remainder() {
    let codec = ListCodec::new(FloatCodec::new()).with_count(CountRange::exactly(3));
    assert!(codec.parse("1, 2, 3, 4, 5").is_err());

    let mut input = "1, 2, 3, 4, 5";
    assert_eq!(codec.parse_prefix(&mut input).unwrap(), vec![1.0, 2.0, 3.0]);
    assert_eq!(input, " 4, 5");

    let mut compact = "1,2,3,4,5";
    assert_eq!(codec.parse_prefix(&mut compact).unwrap(), vec![1.0, 2.0, 3.0]);
    assert_eq!(compact, "4,5");
}

#[test]
fn test_incremental_parse_with_newline_separator() {
    let codec = ListCodec::new(FloatCodec::new())
        .with_separator("\n")
        .with_count(CountRange::exactly(3));
    assert!(codec.parse("1\n2\n3\n4\n5").is_err());

    let mut input = "1\n2\n3\n4\n5";
    assert_eq!(codec.parse_prefix(&mut input).unwrap(), vec![1.0, 2.0, 3.0]);
    assert_eq!(input, "4\n5");
}

#[test]
fn test_incremental_parse_consumes_whole_short_input() {
    let codec = ListCodec::new(FloatCodec::new()).with_count(CountRange::between(1, 5));
    let mut input = "1, 2";
    assert_eq!(codec.parse_prefix(&mut input).unwrap(), vec![1.0, 2.0]);
    assert_eq!(input, "");
}

#[test]
fn test_nested_lists_share_one_input() {
    let codec = ListCodec::new(ListCodec::new(FloatCodec::new())).with_separator("\n");
    assert_eq!(
        codec.parse("1,2,3\n4,5").unwrap(),
        vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]
    );
}

#[test]
fn test_tuple_disambiguation() {
    let codec = TupleCodec::new(NumberCodec::<i32>::new(), NumberCodec::<i32>::new(), ", ");
    assert_eq!(codec.format(&(1, 2)), "1, 2");
    for input in ["1,2", "1 ,2", "1, 2", "1 , 2"] {
        assert_eq!(codec.parse(input).unwrap(), (1, 2), "input {input:?}");
    }
    assert!(codec.parse("1,").is_err());
    assert!(codec.parse(",1").is_err());
}

#[test]
fn test_tuple_disallowing_whitespace() {
    let codec = TupleCodec::new(NumberCodec::<i32>::new(), NumberCodec::<i32>::new(), ", ")
        .disallowing_whitespace();
    assert_eq!(codec.parse("1,2").unwrap(), (1, 2));
    assert!(codec.parse("1, 2").is_err());
}

#[test]
fn test_tuple_delimiter_candidates() {
    let codec = TupleCodec::new(NumberCodec::<i32>::new(), NumberCodec::<i32>::new(), ", ")
        .with_delimiters([";", ","]);
    assert_eq!(codec.parse("1;2").unwrap(), (1, 2));
    assert_eq!(codec.parse("1,2").unwrap(), (1, 2));
}

#[test]
fn test_mapping_round_trip_preserves_order() {
    let codec = MappingCodec::new(IdentityCodec, NumberCodec::<i32>::new());
    let pairs = vec![("B".to_string(), 20), ("A".to_string(), 10)];
    assert_eq!(codec.format(&pairs), "B: 20, A: 10");
    assert_eq!(codec.parse("B: 20, A: 10").unwrap(), pairs);
    // Compact input parses the same, keys trimmed.
    assert_eq!(codec.parse("B:20, A:10").unwrap(), pairs);
}

#[test]
fn test_mapping_numeric_keys() {
    let codec = MappingCodec::new(NumberCodec::<i32>::new(), NumberCodec::<i32>::new());
    assert_eq!(codec.format(&vec![(1, 10), (2, 20)]), "1: 10, 2: 20");
    assert_eq!(codec.parse("1:10, 2:20").unwrap(), vec![(1, 10), (2, 20)]);
}

#[test]
fn test_mapping_custom_separators() {
    let codec = MappingCodec::new(IdentityCodec, NumberCodec::<i32>::new())
        .with_key_separator("=")
        .with_item_separator("; ");
    let pairs = vec![("a".to_string(), 1), ("b".to_string(), 2)];
    assert_eq!(codec.format(&pairs), "a= 1; b= 2");
    assert_eq!(codec.parse("a= 1; b= 2").unwrap(), pairs);
}

#[test]
fn test_error_propagates_from_leaf_unchanged() {
    let leaf = NumberCodec::<i32>::new();
    let leaf_err = leaf.parse("x").unwrap_err();
    let list_err = ListCodec::new(leaf).parse("1,x,3").unwrap_err();
    assert_eq!(leaf_err, list_err);
}

//! Integration tests pinning the domain codecs' exact grammar: vectors,
//! matrices, quaternions, ranges, angles, and the serde form of the config
//! enums.

use std::f64::consts::FRAC_PI_4;

use numform::{
    AngleCodec, AngleUnit, Codec, CompositeStyle, CountRange, Error, FloatCodec, MatrixCodec,
    MatrixOrder, NumberCodec, ParseableCodec, Quaternion, QuaternionCodec, QuaternionStyle,
    RangeCodec, VectorCodec,
};

fn two_places() -> FloatCodec {
    FloatCodec::new().with_max_fraction_digits(2)
}

#[test]
fn test_vector_mapping_grammar() {
    let codec = VectorCodec::<_, 4>::new(FloatCodec::new());
    let v = [0.0, 1.0, 2.0, 3.0];
    assert_eq!(codec.format(&v), "x: 0, y: 1, z: 2, w: 3");
    assert_eq!(codec.parse("x: 0, y: 1, z: 2, w: 3").unwrap(), v);
}

#[test]
fn test_vector_missing_key() {
    let codec = VectorCodec::<_, 3>::new(FloatCodec::new());
    assert_eq!(
        codec.parse("x: 0, y: 1").unwrap_err(),
        Error::missing_keys(["z"])
    );
}

#[test]
fn test_vector_extra_keys_are_ignored() {
    let codec = VectorCodec::<_, 2>::new(FloatCodec::new());
    assert_eq!(codec.parse("x: 1, y: 2, w: 9").unwrap(), [1.0, 2.0]);
}

#[test]
fn test_vector_round_trip_all_arities_and_styles() {
    for style in [CompositeStyle::List, CompositeStyle::Mapping] {
        let codec2 = VectorCodec::<_, 2>::new(FloatCodec::new()).with_style(style);
        let v2 = [1.5, -2.5];
        assert_eq!(codec2.parse(&codec2.format(&v2)).unwrap(), v2);

        let codec3 = VectorCodec::<_, 3>::new(FloatCodec::new()).with_style(style);
        let v3 = [1.5, -2.5, 0.25];
        assert_eq!(codec3.parse(&codec3.format(&v3)).unwrap(), v3);

        let codec4 = VectorCodec::<_, 4>::new(FloatCodec::new()).with_style(style);
        let v4 = [1.5, -2.5, 0.25, 100.0];
        assert_eq!(codec4.parse(&codec4.format(&v4)).unwrap(), v4);
    }
}

#[test]
fn test_matrix_4x4_grammar() {
    let codec = MatrixCodec::<_, 4, 4>::new(FloatCodec::new());
    let mut m = [[0.0; 4]; 4];
    for row in 0..4 {
        for col in 0..4 {
            m[row][col] = (row * 4 + col) as f64;
        }
    }
    let expected = "0, 1, 2, 3\n4, 5, 6, 7\n8, 9, 10, 11\n12, 13, 14, 15";
    assert_eq!(codec.format(&m), expected);
    assert_eq!(codec.parse(expected).unwrap(), m);
}

#[test]
fn test_matrix_orders_agree_on_coordinates() {
    let m = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
    for order in [MatrixOrder::RowMajor, MatrixOrder::ColumnMajor] {
        let codec = MatrixCodec::<_, 3, 3>::new(FloatCodec::new()).with_order(order);
        assert_eq!(codec.parse(&codec.format(&m)).unwrap(), m, "order {order:?}");
    }
}

#[test]
fn test_matrix_non_square() {
    let codec = MatrixCodec::<_, 2, 3>::new(FloatCodec::new());
    let m = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    assert_eq!(codec.format(&m), "1, 2, 3\n4, 5, 6");
    assert_eq!(codec.parse("1, 2, 3\n4, 5, 6").unwrap(), m);

    let columns = codec.with_order(MatrixOrder::ColumnMajor);
    assert_eq!(columns.format(&m), "1, 4\n2, 5\n3, 6");
    assert_eq!(columns.parse("1, 4\n2, 5\n3, 6").unwrap(), m);
}

#[test]
fn test_matrix_wrong_row_width() {
    let codec = MatrixCodec::<_, 2, 2>::new(FloatCodec::new());
    assert_eq!(
        codec.parse("1, 2, 3\n4, 5, 6").unwrap_err(),
        Error::count(2, 2, 3)
    );
}

#[test]
fn test_quaternion_components_grammar() {
    let q = Quaternion::from_angle_axis(FRAC_PI_4, [0.0, 0.0, 1.0]);
    let codec = QuaternionCodec::new(two_places());
    assert_eq!(codec.format(&q), "real: 0.92, ix: 0, iy: 0, iz: 0.38");
}

#[test]
fn test_quaternion_vector_grammar() {
    let q = Quaternion::from_angle_axis(FRAC_PI_4, [0.0, 0.0, 1.0]);
    let codec = QuaternionCodec::new(two_places()).with_style(QuaternionStyle::Vector);
    assert_eq!(codec.format(&q), "x: 0, y: 0, z: 0.38, w: 0.92");

    let positional = codec.with_composite_style(CompositeStyle::List);
    assert_eq!(positional.format(&q), "0, 0, 0.38, 0.92");
}

#[test]
fn test_quaternion_angle_axis_grammar() {
    let q = Quaternion::from_angle_axis(FRAC_PI_4, [0.0, 0.0, 1.0]);
    let codec = QuaternionCodec::new(two_places()).with_style(QuaternionStyle::AngleAxis);
    assert_eq!(codec.format(&q), "angle: 0.79, x: 0, y: 0, z: 1");
}

#[test]
fn test_quaternion_round_trip_all_styles() {
    let q = Quaternion::from_angle_axis(1.0, [0.0, 1.0, 0.0]);
    for style in [
        QuaternionStyle::Components,
        QuaternionStyle::ImaginaryReal,
        QuaternionStyle::Vector,
        QuaternionStyle::AngleAxis,
    ] {
        let codec = QuaternionCodec::new(FloatCodec::new()).with_style(style);
        let parsed = codec.parse(&codec.format(&q)).unwrap();
        assert!(
            (parsed.real - q.real).abs() < 1e-9
                && (parsed.ix - q.ix).abs() < 1e-9
                && (parsed.iy - q.iy).abs() < 1e-9
                && (parsed.iz - q.iz).abs() < 1e-9,
            "style {style:?}: {parsed:?} != {q:?}"
        );
    }
}

#[test]
fn test_quaternion_identity_shortcut_is_symmetric() {
    for style in [
        QuaternionStyle::Components,
        QuaternionStyle::ImaginaryReal,
        QuaternionStyle::Vector,
        QuaternionStyle::AngleAxis,
    ] {
        let codec = QuaternionCodec::new(FloatCodec::new()).with_style(style);
        assert_eq!(codec.format(&Quaternion::IDENTITY), "identity");
        assert_eq!(codec.parse("identity").unwrap(), Quaternion::IDENTITY);
        assert_eq!(codec.parse("  Identity ").unwrap(), Quaternion::IDENTITY);
    }
}

#[test]
fn test_quaternion_without_human_readable_flag() {
    let codec = QuaternionCodec::new(FloatCodec::new()).human_readable(false);
    assert_eq!(
        codec.format(&Quaternion::IDENTITY),
        "real: 1, ix: 0, iy: 0, iz: 0"
    );
    assert!(codec.parse("identity").is_err());
}

#[test]
fn test_quaternion_missing_field() {
    let codec = QuaternionCodec::new(FloatCodec::new());
    assert_eq!(
        codec.parse("real: 1, ix: 0, iy: 0").unwrap_err(),
        Error::missing_keys(["iz"])
    );
}

#[test]
fn test_range_grammar() {
    let codec = RangeCodec::new(NumberCodec::<i32>::new());
    assert_eq!(codec.format(&(1..=2)), "1 ... 2");
    assert_eq!(codec.parse("1 ... 2").unwrap(), 1..=2);
    assert_eq!(codec.parse("1 - 2").unwrap(), 1..=2);
    assert!(codec.parse("1 2").is_err());

    let spaced = codec.with_parse_delimiters([" "]);
    assert_eq!(spaced.parse("1 2").unwrap(), 1..=2);
}

#[test]
fn test_range_inverted_bounds() {
    let codec = RangeCodec::new(NumberCodec::<i32>::new());
    assert!(matches!(codec.parse("5 ... 3"), Err(Error::Parse { .. })));
}

#[test]
fn test_angle_grammar() {
    let degrees = AngleCodec::new(two_places());
    assert_eq!(degrees.format(&FRAC_PI_4), "45°");
    assert!((degrees.parse("45°").unwrap() - FRAC_PI_4).abs() < 1e-12);

    let radians = AngleCodec::new(two_places()).with_unit(AngleUnit::Radians);
    assert_eq!(radians.format(&FRAC_PI_4), "0.79 rad");

    assert_eq!(
        degrees.parse("45").unwrap_err(),
        Error::unknown_unit("45")
    );
}

#[test]
fn test_angle_inside_a_list() {
    // Leaf codecs slot into the combinators like any other scalar codec.
    let codec = numform::ListCodec::new(AngleCodec::new(two_places()));
    let angles = vec![0.0, FRAC_PI_4];
    assert_eq!(codec.format(&angles), "0°, 45°");
    let parsed = codec.parse("0°, 45°").unwrap();
    assert!((parsed[1] - FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn test_config_enums_serde_round_trip() {
    assert_eq!(
        serde_json::to_string(&CompositeStyle::Mapping).unwrap(),
        "\"mapping\""
    );
    assert_eq!(
        serde_json::from_str::<MatrixOrder>("\"column_major\"").unwrap(),
        MatrixOrder::ColumnMajor
    );
    assert_eq!(
        serde_json::from_str::<QuaternionStyle>("\"angle_axis\"").unwrap(),
        QuaternionStyle::AngleAxis
    );
    let count = CountRange::between(2, 4);
    let json = serde_json::to_string(&count).unwrap();
    assert_eq!(serde_json::from_str::<CountRange>(&json).unwrap(), count);
}

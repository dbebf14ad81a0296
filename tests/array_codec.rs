//! Array Codec Tests
//!
//! Encode/decode behaviour through the public codec surface:
//! - Quoting and escaping are unconditional for scalars
//! - Only the bare NULL token decodes to null
//! - Both parser strategies agree on results and errors
//! - Malformed literals fail with a positioned error
//! - Nesting is bounded, so hostile input cannot exhaust the stack

use pgmarshal::array::{
    delimiter_conflict, ArrayCodec, ArrayConfig, ArrayParser, ArrayValue, NativeParser,
    ParseErrorKind, ParserKind, ReferenceParser, MAX_DEPTH,
};
use pgmarshal::{decode_array, encode_array};

// =============================================================================
// Helper Functions
// =============================================================================

fn text_config() -> ArrayConfig {
    ArrayConfig::new("text", ',')
}

fn arr(items: Vec<ArrayValue>) -> ArrayValue {
    ArrayValue::Array(items)
}

fn t(s: &str) -> ArrayValue {
    ArrayValue::text(s)
}

fn both_parsers() -> Vec<ArrayCodec> {
    vec![
        ArrayCodec::with_parser(text_config(), ParserKind::Native),
        ArrayCodec::with_parser(text_config(), ParserKind::Reference),
    ]
}

// =============================================================================
// Escaping & Null Tests
// =============================================================================

/// Quote and backslash are both escaped, and decode recovers them.
#[test]
fn test_escaping_quote_and_backslash() {
    let encoded = encode_array(&text_config(), &vec!["a\"b", "c\\d"]);
    assert_eq!(encoded, r#"{"a\"b","c\\d"}"#);

    let decoded = decode_array(&text_config(), &encoded).unwrap();
    assert_eq!(decoded, arr(vec![t("a\"b"), t("c\\d")]));
}

/// Null encodes to the bare token.
#[test]
fn test_null_handling() {
    let encoded = encode_array(&text_config(), &vec![None, Some("x")]);
    assert_eq!(encoded, r#"{NULL,"x"}"#);

    let decoded = decode_array(&text_config(), &encoded).unwrap();
    assert_eq!(decoded, arr(vec![ArrayValue::Null, t("x")]));
}

/// A quoted "NULL" is the string, not the null sentinel.
#[test]
fn test_quoted_null_is_text() {
    for codec in both_parsers() {
        let decoded = codec.decode(r#"{"NULL",NULL}"#).unwrap();
        assert_eq!(decoded, arr(vec![t("NULL"), ArrayValue::Null]));
    }
}

/// Encoding the string "NULL" must not collide with null.
#[test]
fn test_null_string_round_trips() {
    let codec = ArrayCodec::new(text_config());
    let value = vec![Some("NULL"), None];
    let decoded = codec.decode(&codec.encode(&value)).unwrap();
    assert_eq!(decoded, arr(vec![t("NULL"), ArrayValue::Null]));
}

// =============================================================================
// Nesting Tests
// =============================================================================

#[test]
fn test_two_level_nesting() {
    for codec in both_parsers() {
        let decoded = codec.decode("{{1,2},{3,4}}").unwrap();
        assert_eq!(
            decoded,
            arr(vec![arr(vec![t("1"), t("2")]), arr(vec![t("3"), t("4")])])
        );
        assert_eq!(decoded.depth(), 2);
    }
}

#[test]
fn test_empty_arrays() {
    for codec in both_parsers() {
        assert_eq!(codec.decode("{}").unwrap(), arr(vec![]));
        assert_eq!(codec.decode("{{},{}}").unwrap(), arr(vec![arr(vec![]), arr(vec![])]));
    }
}

/// Dimension decoration is accepted and ignored.
#[test]
fn test_dimension_decoration() {
    for codec in both_parsers() {
        assert_eq!(
            codec.decode("[0:1]={a,b}").unwrap(),
            codec.decode("{a,b}").unwrap()
        );
        assert_eq!(
            codec.decode("[1:1][1:2]={{a,b}}").unwrap(),
            codec.decode("{{a,b}}").unwrap()
        );
    }
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

/// Decode(Encode(V)) == V for nested strings and nulls.
#[test]
fn test_round_trip_nested_values() {
    let values = vec![
        arr(vec![]),
        arr(vec![t("")]),
        arr(vec![t("plain"), ArrayValue::Null, t("with space")]),
        arr(vec![t("{braces}"), t("comma,inside"), t("semi;colon")]),
        arr(vec![t("\\"), t("\""), t("\\\"\\")]),
        arr(vec![arr(vec![t("a"), ArrayValue::Null]), arr(vec![t("ü"), t("日本")])]),
        arr(vec![arr(vec![arr(vec![t("deep")])])]),
    ];

    for delimiter in [',', ';', '|', '¦'] {
        for kind in [ParserKind::Native, ParserKind::Reference] {
            let codec = ArrayCodec::with_parser(ArrayConfig::new("t", delimiter), kind);
            for value in &values {
                let encoded = codec.encode(value);
                assert_eq!(&codec.decode(&encoded).unwrap(), value, "{}", encoded);
            }
        }
    }
}

/// Typed scalars stringify before quoting.
#[test]
fn test_typed_scalars_encode_as_text() {
    let codec = ArrayCodec::new(ArrayConfig::new("int4", ','));
    let encoded = codec.encode(&vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(encoded, r#"{{"1","2"},{"3","4"}}"#);
    assert_eq!(
        codec.decode(&encoded).unwrap(),
        codec.decode("{{1,2},{3,4}}").unwrap()
    );
}

#[test]
fn test_box_delimiter() {
    let codec = ArrayCodec::new(ArrayConfig::for_type("box"));
    assert_eq!(codec.delimiter(), ';');
    let decoded = codec.decode("{(1,1),(0,0);(2,2),(1,1)}").unwrap();
    assert_eq!(decoded, arr(vec![t("(1,1),(0,0)"), t("(2,2),(1,1)")]));
}

// =============================================================================
// Bareword Tests
// =============================================================================

/// The delimiter only appears in a bareword when escaped.
#[test]
fn test_bareword_escaped_delimiter() {
    for codec in both_parsers() {
        assert_eq!(codec.decode(r"{a\,b,c}").unwrap(), arr(vec![t("a,b"), t("c")]));
    }
}

#[test]
fn test_bareword_escaped_null_is_text() {
    for codec in both_parsers() {
        assert_eq!(codec.decode(r"{\NULL}").unwrap(), arr(vec![t("NULL")]));
        assert_eq!(codec.decode("{null}").unwrap(), arr(vec![t("null")]));
    }
}

#[test]
fn test_bareword_keeps_whitespace() {
    for codec in both_parsers() {
        assert_eq!(codec.decode("{ a b ,c}").unwrap(), arr(vec![t(" a b "), t("c")]));
    }
}

// =============================================================================
// Malformed Input Tests
// =============================================================================

#[test]
fn test_missing_closing_brace() {
    for codec in both_parsers() {
        let err = codec.decode("{1,2").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnbalancedBraces);
        assert_eq!(err.position(), 4);
    }
}

#[test]
fn test_malformed_inputs_fail_identically() {
    let inputs = [
        "",
        "1,2",
        "{",
        "{a,,b}",
        "{a,}",
        "{,}",
        "{\"abc",
        "{\"a\"b}",
        "{a{b}",
        "{a\"b}",
        "{a}x",
        "{{a},b",
        "{{{{{{{{}}}}}}}}",
        "[]={a}",
        "[1:]={a}",
    ];

    for input in inputs {
        let native = NativeParser.parse(input, ',').unwrap_err();
        let reference = ReferenceParser.parse(input, ',').unwrap_err();
        assert_eq!(native.kind(), reference.kind(), "{:?}", input);
        assert_eq!(native.position(), reference.position(), "{:?}", input);
    }
}

#[test]
fn test_error_codes_are_stable() {
    let err = decode_array(&text_config(), "nope").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::MissingOpenBrace);
    assert!(err.code().starts_with("PGM_ARRAY_"));
}

// =============================================================================
// Depth Limit Tests
// =============================================================================

/// Deeply nested but balanced input is an error, not a crash.
#[test]
fn test_deeply_nested_input_is_rejected() {
    let depth = 200_000;
    let input = format!("{}{}", "{".repeat(depth), "}".repeat(depth));

    for codec in both_parsers() {
        let err = codec.decode(&input).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::TooDeep, "{}", codec.parser_name());
        assert_eq!(err.position(), MAX_DEPTH);
    }
}

#[test]
fn test_max_depth_round_trips() {
    let mut value = arr(vec![t("leaf"), ArrayValue::Null]);
    for _ in 1..MAX_DEPTH {
        value = arr(vec![value]);
    }
    assert_eq!(value.depth(), MAX_DEPTH);

    for codec in both_parsers() {
        assert_eq!(codec.decode(&codec.encode(&value)).unwrap(), value);
    }
}

// =============================================================================
// Delimiter Validation Tests
// =============================================================================

#[test]
fn test_structural_delimiters_are_flagged() {
    for delimiter in ['{', '}', '"', '\\', ' '] {
        assert!(delimiter_conflict(delimiter).is_some(), "{:?}", delimiter);
        assert!(!ArrayConfig::new("t", delimiter).is_valid());
    }
    for delimiter in [',', ';', '|', '¦'] {
        assert!(ArrayConfig::new("t", delimiter).is_valid());
    }
}

// =============================================================================
// Strategy Selection Tests
// =============================================================================

#[test]
fn test_non_ascii_delimiter_falls_back() {
    let codec = ArrayCodec::with_parser(ArrayConfig::new("t", '¦'), ParserKind::Native);
    assert_eq!(codec.parser_name(), "reference");
    assert_eq!(codec.decode("{a¦b}").unwrap(), arr(vec![t("a"), t("b")]));
}

#[test]
fn test_codec_is_shareable_across_threads() {
    let codec = ArrayCodec::new(text_config());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let codec = codec.clone();
            std::thread::spawn(move || {
                let value = vec![i.to_string()];
                codec.decode(&codec.encode(&value)).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), arr(vec![t(&i.to_string())]));
    }
}

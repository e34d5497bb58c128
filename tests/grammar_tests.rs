//! RFC 8259 grammar conformance: tables of documents that must parse and
//! documents that must be rejected, organized by token class.

use json_tidy::validate;

fn accepts(inputs: &[&str]) {
    for input in inputs {
        assert!(validate(input).is_ok(), "should accept {input:?}");
    }
}

fn rejects(inputs: &[&str]) {
    for input in inputs {
        let err = validate(input).unwrap_err();
        assert!(err.location().is_some(), "no location for {input:?}");
    }
}

#[test]
fn test_literal_tokens() {
    accepts(&["null", "true", "false"]);
    rejects(&["nul", "nulll", "NULL", "True", "FALSE", "tru e", "falsey"]);
}

#[test]
fn test_number_grammar() {
    accepts(&[
        "0",
        "-0",
        "7",
        "-12345",
        "0.5",
        "-0.25",
        "3.14159",
        "1e3",
        "1E3",
        "1e+3",
        "1e-3",
        "1.5e10",
        "-2.5E-4",
        "9223372036854775807",
        "-9223372036854775808",
    ]);
    rejects(&[
        "01", "-01", "00", "+1", "1.", ".5", "-.5", "1e", "1e+", "1e-", "1.e3", "--1", "1..2",
        "0x10", "Infinity", "NaN", "1e999",
    ]);
}

#[test]
fn test_string_grammar() {
    accepts(&[
        r#""""#,
        r#""plain""#,
        r#""with space""#,
        r#""\"""#,
        r#""\\""#,
        r#""\/""#,
        r#""\b\f\n\r\t""#,
        r#""A""#,
        r#""é""#,
        r#""😀""#,
        "\"\\ud83d\\ude00\"",
    ]);
    rejects(&[
        r#"""#,
        r#""unterminated"#,
        r#""bad \x escape""#,
        r#""\u12""#,
        r#""\u12G4""#,
        r#""\uD83D""#,
        r#""\uD83D\n""#,
        r#""\uDE00""#,
        "\"raw\ttab\"",
        "\"raw\nnewline\"",
        "'single'",
    ]);
}

#[test]
fn test_object_grammar() {
    accepts(&[
        "{}",
        r#"{"a":1}"#,
        r#"{"a":1,"b":2}"#,
        r#"{"":0}"#,
        r#"{"a":{"b":{"c":null}}}"#,
        "{ \"a\" : 1 }",
    ]);
    rejects(&[
        "{",
        "}",
        r#"{"a":1,}"#,
        r#"{"a":}"#,
        r#"{"a"}"#,
        r#"{"a" 1}"#,
        r#"{"a":1 "b":2}"#,
        r#"{a:1}"#,
        r#"{1:2}"#,
        r#"{"a":1,,"b":2}"#,
        r#"{,}"#,
    ]);
}

#[test]
fn test_array_grammar() {
    accepts(&[
        "[]",
        "[1]",
        "[1,2,3]",
        "[[]]",
        "[[1],[2]]",
        "[ 1 , 2 ]",
        r#"[null,true,"x",{"k":[]}]"#,
    ]);
    rejects(&["[", "]", "[1,]", "[,1]", "[1 2]", "[1,,2]", "[1;2]"]);
}

#[test]
fn test_whitespace_rules() {
    // only space, tab, CR, and LF count as whitespace between tokens
    accepts(&[" \t\r\n[ 1 ,\n2 ]\t", "\n\n{\n}\n"]);
    // other Unicode spacing characters are not JSON whitespace
    rejects(&["\u{a0}1", "\u{2028}[]", "[1,\u{feff}2]"]);
}

#[test]
fn test_document_boundaries() {
    rejects(&["", "   ", "\t\n", "{} {}", "1 2", "null true", "[]]", "{}}"]);
}

#[test]
fn test_comments_are_not_json() {
    rejects(&[
        "// line\n{}",
        "/* block */ {}",
        "{} // trailing",
        "{\"a\": 1 /* inline */}",
        "# hash\n1",
    ]);
}

#[test]
fn test_error_locations_point_at_the_violation() {
    for (input, line, column, offset) in [
        (r#"{"a":}"#, 1, 6, 5),
        ("[1,]", 1, 4, 3),
        ("[1,2\n,]", 2, 2, 6),
        ("{\n\"a\" 1}", 2, 5, 6),
        ("falze", 1, 4, 3),
        (r#"{"é":}"#, 1, 6, 5),
    ] {
        let err = validate(input).unwrap_err();
        let loc = err.location().unwrap();
        assert_eq!(
            (loc.line, loc.column, loc.offset),
            (line, column, offset),
            "{input:?}"
        );
    }
}

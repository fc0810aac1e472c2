//! Query String Parser
//!
//! Splits a raw query string into decoded key/value pairs.
//!
//! # Supported Syntax
//!
//! ```text
//! [?]key[=value][&key[=value]...]
//! ```
//!
//! Keys and values are form-decoded (`+` is a space, then percent-decoding).
//! Parsing is total: every input yields a (possibly empty) list of pairs.

use nom::{
    bytes::complete::take_while,
    character::complete::char,
    combinator::opt,
    multi::separated_list0,
    sequence::{pair, preceded},
    IResult,
};
use std::borrow::Cow;

/// Raw, still-encoded pair as it appears in the query string
type RawPair<'a> = (&'a str, Option<&'a str>);

/// Parse a query string into decoded pairs, in order of appearance
pub fn parse_query_string(input: &str) -> Vec<(String, String)> {
    let input = input.strip_prefix('?').unwrap_or(input);
    if input.is_empty() {
        return Vec::new();
    }

    let raw = match parse_pairs(input) {
        Ok((_, pairs)) => pairs,
        Err(e) => {
            tracing::debug!(error = ?e, "Query string could not be split");
            Vec::new()
        }
    };

    raw.into_iter()
        .filter(|(key, value)| !(key.is_empty() && value.is_none()))
        .map(|(key, value)| {
            (
                decode_component(key).into_owned(),
                value.map(|v| decode_component(v).into_owned()).unwrap_or_default(),
            )
        })
        .collect()
}

/// Parse `pair (& pair)*`
fn parse_pairs(input: &str) -> IResult<&str, Vec<RawPair<'_>>> {
    separated_list0(char('&'), parse_pair)(input)
}

/// Parse a single `key[=value]`; both parts may be empty
fn parse_pair(input: &str) -> IResult<&str, RawPair<'_>> {
    pair(
        take_while(|c: char| c != '&' && c != '='),
        opt(preceded(char('='), take_while(|c: char| c != '&'))),
    )(input)
}

/// Form-decode a single component
///
/// Invalid UTF-8 after percent-decoding is replaced lossily.
pub fn decode_component(raw: &str) -> Cow<'_, str> {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    if !spaced.contains('%') {
        return spaced;
    }

    match urlencoding::decode(&spaced) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(_) => {
            let bytes = urlencoding::decode_binary(spaced.as_bytes());
            Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(input: &str) -> Vec<(String, String)> {
        parse_query_string(input)
    }

    fn owned(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_empty() {
        assert!(pairs("").is_empty());
        assert!(pairs("?").is_empty());
        assert!(pairs("&&").is_empty());
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(pairs("?a=1&b=2"), owned(&[("a", "1"), ("b", "2")]));
        assert_eq!(pairs("a=1"), owned(&[("a", "1")]));
    }

    #[test]
    fn test_parse_percent_encoded() {
        assert_eq!(
            pairs("?line=%7B%22a%22%3A1%7D&bar=2"),
            owned(&[("line", r#"{"a":1}"#), ("bar", "2")])
        );
    }

    #[test]
    fn test_parse_plus_as_space() {
        assert_eq!(pairs("q=hello+world"), owned(&[("q", "hello world")]));
        assert_eq!(pairs("q=a%2Bb"), owned(&[("q", "a+b")]));
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(pairs("flag&x="), owned(&[("flag", ""), ("x", "")]));
    }

    #[test]
    fn test_parse_value_with_equals() {
        assert_eq!(pairs("k=a=b"), owned(&[("k", "a=b")]));
    }

    #[test]
    fn test_parse_raw_json() {
        let query = r#"?pie={"labels":["X","Y"],"datasets":[{"name":"S","data":[1,2]}]}"#;
        let parsed = pairs(query);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].0, "pie");
        assert_eq!(
            parsed[0].1,
            r#"{"labels":["X","Y"],"datasets":[{"name":"S","data":[1,2]}]}"#
        );
    }

    #[test]
    fn test_decode_invalid_utf8_is_lossy() {
        let decoded = decode_component("%FF%FEok");
        assert!(decoded.ends_with("ok"));
        assert!(decoded.contains('\u{FFFD}'));
    }

    #[test]
    fn test_decode_malformed_escape_kept() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }
}

//! Request parameter parsing
//!
//! Ids arrive as path segments or query values and are parsed leniently:
//! leading whitespace, an optional sign and the leading run of digits
//! (`"12abc"` is 12). Input with no leading digits is not a number and can
//! never match a stored record.

use std::collections::HashMap;

use crate::model::RecordId;

/// Decoded query-string parameters (first occurrence of a key wins)
pub type QueryParams = HashMap<String, String>;

/// Parse a query string (without the leading `?`)
pub fn parse_query(query: Option<&str>) -> QueryParams {
    let mut params = HashMap::new();
    let Some(query) = query else {
        return params;
    };

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(key);
        if key.is_empty() {
            continue;
        }
        params.entry(key).or_insert_with(|| decode_component(value));
    }

    params
}

/// Percent-decode one query component, treating `+` as a space
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Leading-integer parse; `None` when there are no leading digits
pub fn parse_int_lenient(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Overflowing values cannot name a record either.
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a record id; anything that is not a representable id is `None`
pub fn parse_id(input: &str) -> Option<RecordId> {
    parse_int_lenient(input).and_then(|n| RecordId::try_from(n).ok())
}

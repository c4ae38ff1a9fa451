/*
 * Copyright 2025 Atlas Dashboards Contributors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Query-string codec and merge.
//!
//! Standard `key=value` pairs, percent-encoded. Absent values are omitted
//! from the serialized form entirely rather than written as empty. The
//! merge keeps existing keys in their original order, overwrites in place
//! and appends new keys at the end, so repeated state updates produce a
//! stable query string.

use std::borrow::Cow;

/// Parse a query string (with or without the leading `?`) into ordered
/// key/value pairs. Pairs without a value decode as an empty string;
/// undecodable percent-sequences are kept verbatim.
pub fn parse(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(part), String::new()),
        })
        .collect()
}

/// Serialize ordered pairs back into a query string (no leading `?`).
pub fn serialize(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Merge `updates` into `existing`.
///
/// Keys already present are preserved unless an update overwrites them;
/// an update carrying `None` drops the key.
pub fn merge(
    existing: &str,
    updates: impl IntoIterator<Item = (String, Option<String>)>,
) -> String {
    let mut pairs = parse(existing);
    for (key, value) in updates {
        match value {
            Some(value) => match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some(pair) => pair.1 = value,
                None => pairs.push((key, value)),
            },
            None => pairs.retain(|(k, _)| *k != key),
        }
    }
    serialize(&pairs)
}

fn decode(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        Err(_) => raw.to_string(),
    }
}

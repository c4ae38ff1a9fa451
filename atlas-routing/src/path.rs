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

//! Path templates.
//!
//! Templates are a mini-language of literal segments and `:name`
//! parameter placeholders, with `*` reserved for the catch-all route.
//! Resolution substitutes parameter values into a concrete link target.
//! There is deliberately no validation layer beyond "every `:name` needs
//! a value" — malformed values pass through as-is and surface wherever
//! the resulting link is used.

use std::collections::BTreeMap;
use thiserror::Error;

/// Catch-all template used by the not-found route.
pub const WILDCARD: &str = "*";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("missing value for path parameter `:{0}`")]
    MissingParam(String),
}

/// Names of the `:name` parameters in a template, in order of appearance.
pub fn param_names(template: &str) -> Vec<&str> {
    template
        .split('/')
        .filter_map(|segment| segment.strip_prefix(':'))
        .collect()
}

/// Substitute parameter values into `template`.
///
/// Literal segments (including `*`) are copied through untouched.
pub fn resolve(template: &str, params: &BTreeMap<String, String>) -> Result<String, PathError> {
    let mut out = String::with_capacity(template.len());
    for (i, segment) in template.split('/').enumerate() {
        if i > 0 {
            out.push('/');
        }
        match segment.strip_prefix(':') {
            Some(name) => match params.get(name) {
                Some(value) => out.push_str(value),
                None => return Err(PathError::MissingParam(name.to_string())),
            },
            None => out.push_str(segment),
        }
    }
    Ok(out)
}

// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod use_debounced_value;
pub mod use_query_state;

pub use use_debounced_value::use_debounced_value;
pub use use_query_state::use_query_state;

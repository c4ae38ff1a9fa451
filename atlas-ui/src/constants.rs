// SPDX-License-Identifier: MIT OR Apache-2.0

/// Quiescence window for debounced inputs (trailing edge only).
pub const DEBOUNCE_MS: u32 = 300;

/// Projects shown per page on the community dashboard.
pub const PAGE_SIZE: usize = 10;

/// Fallback copy shown when a page render fails.
pub const RENDER_FAILURE_TEXT: &str = "Something went wrong while displaying this page.";

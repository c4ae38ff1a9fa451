// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod nav_bar;
pub mod page_view;
pub mod route_link;

pub use nav_bar::NavBar;
pub use page_view::PageView;
pub use route_link::RouteLink;

// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod home;
pub mod loader;
pub mod login;
pub mod manager_project;
pub mod manager_stats;
pub mod not_found;
pub mod project;
pub mod projects;

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! A two-screen roster form for the terminal.
//!
//! The home screen edits a draft [`model::Student`] and appends it to a
//! [`model::Roster`]. Navigating to the result screen carries a form-encoded
//! rendering of the roster as the `listData` route parameter, which the
//! result screen decodes and displays.

pub mod config;
pub mod model;
pub mod transfer;
pub mod tui;

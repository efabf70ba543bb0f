#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Offline intake form: a local submission store with XLSX export and a
//! terminal front end.

pub mod export;
pub mod model;
pub mod store;
pub mod tui;

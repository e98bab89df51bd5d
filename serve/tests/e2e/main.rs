//! End-to-end tests: a real server on `127.0.0.1:0` driven over HTTP with reqwest.
//!
//! Run with `--nocapture` to see `[e2e]` lines.

mod common;

mod categories;
mod cors;
mod history;
mod invalid_json;
mod optimize;
mod templates;

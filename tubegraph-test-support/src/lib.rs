//! Shared test utilities used across tubegraph crates.
//!
//! - [`recording`] captures tracing spans and events so tests can assert on
//!   instrumentation.
//! - [`proptest_profile`] reads the case count and fork policy that property
//!   suites share.

pub mod proptest_profile;
pub mod recording;

//! API integration test suite.
//!
//! Each test gets its own in-memory SQLite database with migrations applied,
//! so no external services are needed.
//!
//! Run with: cargo test --test api


mod test_cascades;
mod test_events;
mod test_profile;
mod test_signup;

//! Environment-driven knobs for test suites run in CI.

pub mod property_test_profile;

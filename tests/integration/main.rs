//! Integration test harness.

mod cli_test;
mod script_test;
mod sequence_test;

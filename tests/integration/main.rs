//! Integration tests for historai.

mod cli_test;
mod helpers;
mod history_test;

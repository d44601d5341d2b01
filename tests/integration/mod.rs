//! Integration tests for the project tree service

mod test_utils;

mod config_integration;
mod file_mutators;

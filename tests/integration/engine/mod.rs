//! Engine integration tests.

pub mod scoring;

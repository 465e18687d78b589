//! API integration tests.

pub mod scan;

//! Deterministic, pure logic for grading boat logs.
//!
//! Core modules are free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod classifier;
pub mod grader;
pub mod population;
pub mod successors;
pub mod types;

//! Test helpers shared across crates.
//!
//! This crate provides an in-memory flag registry that records what the
//! binder registers and lets tests drive setters by flag name.

pub mod registry;

pub use registry::{RecordingRegistry, Registration};

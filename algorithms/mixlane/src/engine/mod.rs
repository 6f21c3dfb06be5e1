//! Execution engine.
//!
//! Runtime kernel selection over the capability snapshot.

pub mod dispatcher;

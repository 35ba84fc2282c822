//! buildlink-lib: integration-layer support for bridging editor tooling to a
//! build orchestrator.
//!
//! This crate provides the pieces of the bridge shared by the production
//! dispatch path and its test harnesses:
//! - `TestHooks`: optional async callbacks awaited at lifecycle extension points
//! - `tasklog`: deterministic per-task fingerprints for interleaved log output
//! - `hash`: stable string hashing backing the fingerprints

pub mod hash;
pub mod hooks;
pub mod tasklog;

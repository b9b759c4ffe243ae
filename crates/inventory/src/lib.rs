//! Inventory domain module (batch traceability records).
//!
//! This crate contains the batch model and the in-memory batch registry that
//! enforces batch-number uniqueness per material and plant (no IO, no HTTP).

pub mod batch;
pub mod registry;

pub use batch::{Batch, BatchDetails, BatchId, BatchKey};
pub use registry::BatchRegistry;

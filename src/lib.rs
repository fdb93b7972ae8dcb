//! Work item store and concurrent batch processor.
//!
//! The batch processor lists every item identifier in an [`storage::ItemStore`],
//! transitions each `NEW` (or otherwise unprocessed) item to `PROCESSED` on a
//! bounded worker pool, and resolves a single completion handle with the items
//! it transitioned, or with every per-item failure.

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod storage;

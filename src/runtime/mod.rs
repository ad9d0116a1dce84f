//! Runtime module
//!
//! Async task execution and streaming primitives used by the scoring pipeline.

pub mod async_task;

pub use async_task::{AsyncStream, AsyncTask};

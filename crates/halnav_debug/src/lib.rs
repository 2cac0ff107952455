//! Session tracing for the HAL navigator.
//!
//! This crate provides:
//! - [`Tracer`] - Records what happened in a session, turn by turn
//! - [`TraceBuffer`] - A bounded ring of the most recent records
//! - [`HumanFormatter`] / [`JsonFormatter`] - Renderings of a record

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceEvent, TraceFormatter, TraceOutput,
    TraceRecord, TraceSummary, Tracer, TracerConfig,
};

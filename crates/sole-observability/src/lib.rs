//! Request ids and structured logging for Sole Storefront workloads.

mod logging;
mod request_id;

pub use logging::{EventBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};
pub use request_id::RequestId;

//! Origin automation module
//!
//! Everything Origin-specific lives here: the session trait mirroring the
//! automation object model, the style vocabulary mapper, the destination
//! writer and the graph property transfer.
//!
//! Structure:
//! - `session.rs`: OriginSession trait and the operation argument types
//! - `recording.rs`: in-memory session for tests and dry runs
//! - `style.rs`: source style -> Origin enumeration mapping
//! - `writer.rs`: column/plot writer
//! - `graph.rs`: axis, legend and page property transfer
//! - `error.rs`: error types

pub mod error;
pub mod graph;
pub mod recording;
pub mod session;
pub mod style;
pub mod writer;

// Re-exports for convenience
pub use error::{OriginError, Result};
pub use recording::RecordingSession;
pub use session::OriginSession;

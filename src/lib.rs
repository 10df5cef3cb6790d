//! fig2origin — replay figure data and styling into OriginLab.
//!
//! A thin automation bridge: it walks the line/marker/error-bar artifacts of
//! an in-memory figure model, translates each visual attribute into Origin's
//! own vocabulary, writes the coordinate data as worksheet columns and
//! recreates the plots on a graph page through an automation session.
//!
//! The translation is best effort by policy: artifact kinds the bridge does
//! not know are skipped with a warning, style values with no Origin
//! equivalent degrade to a documented default, and nothing is retried.
//! Transfers append — running the same transfer twice duplicates columns
//! and plots.
//!
//! Module organization:
//! - `figure`: source-side figure model (tagged artifact variants)
//! - `extract`: figure-to-series extraction
//! - `origin`: session trait, style mapper, writer, graph transfer
//! - `theme`: bundled color-increment themes
//! - `config` / `transfer`: options and top-level entry points
//!
//! ```
//! use fig2origin::figure::{Artifact, Axis, Figure, LineArtifact, LineStyleAttrs, UnitSeries};
//! use fig2origin::{transfer_axis, DestinationLocator, RecordingSession, TransferConfig};
//!
//! let mut axis = Axis::new();
//! axis.artifacts.push(Artifact::Line(LineArtifact {
//!     x: UnitSeries::bare(vec![0.0, 1.0, 2.0]),
//!     y: UnitSeries::bare(vec![0.0, 1.0, 4.0]),
//!     label: Some("Model1".to_string()),
//!     line: LineStyleAttrs::default(),
//! }));
//! let figure = Figure::with_axis(axis);
//!
//! let mut session = RecordingSession::new();
//! let locator = DestinationLocator::new("Book1", "Sheet1", "Graph1");
//! let report = transfer_axis(
//!     &mut session,
//!     &figure,
//!     0,
//!     &locator,
//!     &TransferConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(report.plots_created, 1);
//! ```

pub mod config;
pub mod extract;
pub mod figure;
pub mod origin;
pub mod text;
pub mod theme;
pub mod transfer;

pub use config::TransferConfig;
pub use extract::{extract_axis, ExtractedSeries, Extraction, SeriesData};
pub use figure::{Artifact, Axis, AxisScale, Figure, Rgb, StyleAttributes};
pub use origin::error::{OriginError, Result};
pub use origin::session::OriginSession;
pub use origin::writer::{DestinationLocator, TransferReport};
pub use origin::RecordingSession;
pub use transfer::{transfer_axis, transfer_figure};

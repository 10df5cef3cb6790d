use thiserror::Error;

/// Errors that can occur while driving an Origin session.
///
/// Unsupported artifacts and unmappable style values are deliberately not
/// here: those follow the skip/substitute policy and are logged, never
/// raised.
#[derive(Debug, Error)]
pub enum OriginError {
    /// The Origin session is not running or not reachable. Fatal; the
    /// bridge never retries.
    #[error("Origin session unavailable: {0}")]
    SessionUnavailable(String),

    /// x/y/error column lengths disagree within one series. Detected
    /// before any remote write for that series.
    #[error("series {series}: column lengths differ (x={x_len}, y={y_len}, y_err={err_len:?})")]
    ShapeMismatch {
        series: usize,
        x_len: usize,
        y_len: usize,
        err_len: Option<usize>,
    },

    /// A handle referring to a remote object that no longer exists.
    #[error("stale handle: {0}")]
    StaleHandle(String),

    /// The figure has no axis at the requested index.
    #[error("figure has no axis {0}")]
    NoSuchAxis(usize),

    /// Unknown theme name or malformed theme data.
    #[error("color theme error: {0}")]
    Theme(String),

    /// Any other failure reported by the automation transport.
    #[error("automation error: {0}")]
    Automation(String),
}

/// Type alias for Results using OriginError
pub type Result<T> = std::result::Result<T, OriginError>;

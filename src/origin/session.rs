//! Automation session surface.
//!
//! One trait method per operation the bridge issues against Origin's object
//! model. Argument shapes mirror the COM/LabTalk calls; the transport behind
//! them (COM, a script runner, an in-memory emulation) is the implementor's
//! choice. The session is created and owned by the caller and passed by
//! mutable reference into every bridge call — there is no process-global
//! "current session", and `&mut` enforces one caller at a time.
//!
//! Every call is synchronous and blocking; a hang in Origin propagates as a
//! hang in the caller. No timeouts, no retries.

use super::error::Result;
use super::style::{ColumnDesignation, OriginPlotStyle, PlotType};
use crate::figure::{AxisScale, Rgb};

/// Opaque handle to a workbook page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkbookId(pub usize);

/// Opaque handle to a worksheet layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorksheetId(pub usize);

/// Opaque handle to a graph page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(pub usize);

/// Opaque handle to a plot object on a graph layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlotId(pub usize);

/// Which graph axis an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    X,
    Y,
}

impl AxisKind {
    /// The LabTalk layer-axis object name (`layer.x`, `layer.y`).
    pub fn labtalk_name(self) -> &'static str {
        match self {
            AxisKind::X => "x",
            AxisKind::Y => "y",
        }
    }
}

/// Full contents and header rows of one worksheet column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub designation: ColumnDesignation,
    pub long_name: String,
    /// Units header text (display only; values are bare magnitudes).
    pub units: String,
    pub comments: String,
    pub values: Vec<f64>,
}

/// Arguments of one graph-layer AddPlot call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSpec {
    pub worksheet: WorksheetId,
    pub x_column: usize,
    pub y_column: usize,
    /// Y-error column, referenced by the plot when present.
    pub y_error_column: Option<usize>,
    pub plot_type: PlotType,
}

/// Scale, title and range for one graph axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisProperties {
    pub scale: AxisScale,
    pub title: Option<String>,
    pub range: Option<(f64, f64)>,
}

/// A live connection to Origin's automation interface.
///
/// Implementations map each method onto their transport. Object lookups
/// (`find_*`) return `Ok(None)` for "does not exist"; errors are reserved
/// for an unreachable session or a failing remote call.
pub trait OriginSession {
    /// Create the project folder if needed and make it current.
    fn ensure_folder(&mut self, path: &str) -> Result<()>;

    fn find_workbook(&mut self, name: &str) -> Result<Option<WorkbookId>>;

    fn create_workbook(&mut self, name: &str) -> Result<WorkbookId>;

    fn find_worksheet(&mut self, workbook: WorkbookId, name: &str) -> Result<Option<WorksheetId>>;

    fn add_worksheet(&mut self, workbook: WorkbookId, name: &str) -> Result<WorksheetId>;

    /// Number of columns currently on the worksheet. New columns are always
    /// appended after these, which is what makes repeated transfers
    /// accumulate rather than overwrite.
    fn column_count(&mut self, worksheet: WorksheetId) -> Result<usize>;

    /// Write one column: values, designation and header rows.
    fn set_column(&mut self, worksheet: WorksheetId, index: usize, column: &ColumnSpec)
        -> Result<()>;

    fn find_graph(&mut self, name: &str) -> Result<Option<GraphId>>;

    /// Create a graph page from a template (e.g. `LINE.otp`).
    fn create_graph(&mut self, name: &str, template: &str) -> Result<GraphId>;

    /// Number of plot objects currently on the graph's active layer. New
    /// plots stack after these; LabTalk layer indices are 1-based, so plot
    /// object n is layer index n+1.
    fn plot_count(&mut self, graph: GraphId) -> Result<usize>;

    /// Add one plot object to the graph's active layer.
    fn add_plot(&mut self, graph: GraphId, plot: &PlotSpec) -> Result<PlotId>;

    fn set_plot_style(&mut self, plot: PlotId, style: &OriginPlotStyle) -> Result<()>;

    fn set_axis(&mut self, graph: GraphId, axis: AxisKind, properties: &AxisProperties)
        -> Result<()>;

    /// Set the graph page size in inches.
    fn set_graph_size(&mut self, graph: GraphId, width_inches: f64, height_inches: f64)
        -> Result<()>;

    /// Group plots `first..=last` (1-based layer indices, LabTalk
    /// `layer -g`) so color increment and shared legend entries apply.
    fn group_plots(&mut self, graph: GraphId, first: usize, last: usize) -> Result<()>;

    /// Reconstruct the legend from the current plot objects (`legend -r`).
    fn rebuild_legend(&mut self, graph: GraphId) -> Result<()>;

    /// Insert a title line above the reconstructed legend text.
    fn prepend_legend_title(&mut self, graph: GraphId, title: &str) -> Result<()>;

    /// Import an ordered color list as the graph's color-increment theme.
    fn import_color_theme(&mut self, graph: GraphId, name: &str, colors: &[Rgb]) -> Result<()>;

    /// Rescale the graph layer to its data.
    fn rescale(&mut self, graph: GraphId) -> Result<()>;
}

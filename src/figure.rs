//! Source-side figure model.
//!
//! Callers hand the bridge an explicit model of their figure instead of the
//! bridge probing a plotting session's objects attribute by attribute. Every
//! plotted element is a tagged [`Artifact`] variant carrying only the fields
//! that exist for that kind, so classification happens once, up front.

/// An RGB color, passed through to Origin numerically (no named palette).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Hex form (`#RRGGBB`), the shape LabTalk's `color(...)` accepts.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Axis scale. Origin's other scale types (ln, probability, reciprocal...)
/// have no counterpart in the source model and are never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    /// Base-10 logarithmic.
    Log,
}

/// A column of magnitudes with an optional physical-unit label.
///
/// Only the bare magnitudes ever cross into Origin; the unit label survives
/// solely as axis-title and column-header text.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSeries {
    pub values: Vec<f64>,
    pub unit: Option<String>,
}

impl UnitSeries {
    /// A series with no unit tag.
    pub fn bare(values: Vec<f64>) -> Self {
        UnitSeries { values, unit: None }
    }

    pub fn with_unit(values: Vec<f64>, unit: impl Into<String>) -> Self {
        UnitSeries {
            values,
            unit: Some(unit.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Marker shapes the source model can carry.
///
/// The first twelve have direct Origin symbol equivalents; the rest map to
/// the default symbol (see `origin::style::symbol_shape_code`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Square,
    Circle,
    TriangleUp,
    TriangleDown,
    Diamond,
    Plus,
    Cross,
    Star,
    HLine,
    VLine,
    Hexagon,
    Pentagon,
    /// Pixel-sized point marker; no Origin equivalent.
    Point,
    /// Octagon; no Origin equivalent.
    Octagon,
    /// Thin (vertically stretched) diamond; no Origin equivalent.
    ThinDiamond,
}

/// Dash patterns the source model can carry. All four have direct Origin
/// line-style equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

/// Line appearance of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyleAttrs {
    pub color: Rgb,
    pub style: LineStyle,
    /// Width in points.
    pub width: f64,
}

impl Default for LineStyleAttrs {
    fn default() -> Self {
        LineStyleAttrs {
            color: Rgb::BLACK,
            style: LineStyle::Solid,
            width: 1.5,
        }
    }
}

/// Marker appearance of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyleAttrs {
    pub shape: MarkerShape,
    /// Marker size in points.
    pub size: f64,
    pub face_color: Rgb,
    pub edge_color: Rgb,
    /// Edge width in points.
    pub edge_width: f64,
}

impl Default for MarkerStyleAttrs {
    fn default() -> Self {
        MarkerStyleAttrs {
            shape: MarkerShape::Circle,
            size: 6.0,
            face_color: Rgb::BLACK,
            edge_color: Rgb::BLACK,
            edge_width: 1.0,
        }
    }
}

/// Whether a series draws a line, markers, or both. Decides the Origin plot
/// type (line / scatter / line+symbol).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    Line,
    Markers,
    LineMarkers,
}

/// Extracted visual attributes of one series, ready for the style mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleAttributes {
    pub render: RenderKind,
    pub line: Option<LineStyleAttrs>,
    pub marker: Option<MarkerStyleAttrs>,
}

impl StyleAttributes {
    pub fn line(line: LineStyleAttrs) -> Self {
        StyleAttributes {
            render: RenderKind::Line,
            line: Some(line),
            marker: None,
        }
    }

    pub fn markers(marker: MarkerStyleAttrs) -> Self {
        StyleAttributes {
            render: RenderKind::Markers,
            line: None,
            marker: Some(marker),
        }
    }

    pub fn line_markers(line: LineStyleAttrs, marker: MarkerStyleAttrs) -> Self {
        StyleAttributes {
            render: RenderKind::LineMarkers,
            line: Some(line),
            marker: Some(marker),
        }
    }
}

/// A plain line series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineArtifact {
    pub x: UnitSeries,
    pub y: UnitSeries,
    pub label: Option<String>,
    pub line: LineStyleAttrs,
}

/// A marker-only series.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerArtifact {
    pub x: UnitSeries,
    pub y: UnitSeries,
    pub label: Option<String>,
    pub marker: MarkerStyleAttrs,
}

/// A series drawing both a line and markers.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMarkerArtifact {
    pub x: UnitSeries,
    pub y: UnitSeries,
    pub label: Option<String>,
    pub line: LineStyleAttrs,
    pub marker: MarkerStyleAttrs,
}

/// An error-bar series.
///
/// Only the vertical error component is transferred. `x_err` exists so a
/// source with horizontal error bars is recognized rather than mis-read; the
/// extractor discards it with a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBarArtifact {
    pub x: UnitSeries,
    pub y: UnitSeries,
    /// Symmetric vertical error magnitudes, aligned index-for-index with `y`.
    pub y_err: Vec<f64>,
    /// Horizontal error magnitudes. Recognized and discarded, never written.
    pub x_err: Option<Vec<f64>>,
    pub label: Option<String>,
    pub line: Option<LineStyleAttrs>,
    pub marker: Option<MarkerStyleAttrs>,
}

/// A filled region between two y-curves. The bridge has no mapping rule for
/// this kind; it is skipped during extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionArtifact {
    pub x: UnitSeries,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub label: Option<String>,
    pub fill_color: Rgb,
}

/// One plotted element on an axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Line(LineArtifact),
    Markers(MarkerArtifact),
    LineMarkers(LineMarkerArtifact),
    ErrorBars(ErrorBarArtifact),
    FilledRegion(RegionArtifact),
}

impl Artifact {
    /// Kind name used in logs and skip reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Artifact::Line(_) => "line",
            Artifact::Markers(_) => "markers",
            Artifact::LineMarkers(_) => "line+markers",
            Artifact::ErrorBars(_) => "error-bars",
            Artifact::FilledRegion(_) => "filled-region",
        }
    }
}

/// One coordinate region of a figure and everything plotted on it.
#[derive(Debug, Clone, Default)]
pub struct Axis {
    pub artifacts: Vec<Artifact>,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub x_label: String,
    pub y_label: String,
    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,
    pub legend_title: Option<String>,
}

impl Axis {
    pub fn new() -> Self {
        Axis::default()
    }
}

/// A figure: one or more axes plus the page geometry.
#[derive(Debug, Clone)]
pub struct Figure {
    pub axes: Vec<Axis>,
    /// Page size as (width, height) in inches.
    pub size_inches: (f64, f64),
}

impl Figure {
    /// An empty figure at the conventional default page size.
    pub fn new() -> Self {
        Figure {
            axes: Vec::new(),
            size_inches: (6.4, 4.8),
        }
    }

    /// A figure wrapping a single axis.
    pub fn with_axis(axis: Axis) -> Self {
        let mut fig = Figure::new();
        fig.axes.push(axis);
        fig
    }
}

impl Default for Figure {
    fn default() -> Self {
        Figure::new()
    }
}

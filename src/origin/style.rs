//! Style vocabulary translation.
//!
//! Fixed lookup tables from the source style model to Origin's own
//! enumerations: LabTalk symbol shape codes, line-style codes and numeric
//! plot-type ids. Each source value maps to exactly one destination value;
//! shapes with no Origin equivalent fall back to the default symbol with a
//! debug log, never an error. Colors pass through as numeric RGB.

use crate::figure::{
    AxisScale, LineStyle, LineStyleAttrs, MarkerShape, MarkerStyleAttrs, RenderKind, Rgb,
    StyleAttributes,
};
use log::debug;

/// Origin plot type ids for graph-layer AddPlot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotType {
    Line,
    Scatter,
    LineSymbol,
}

impl PlotType {
    /// Numeric plot-type id (200 line, 201 symbol, 202 symbol+line).
    pub fn id(self) -> i32 {
        match self {
            PlotType::Line => 200,
            PlotType::Scatter => 201,
            PlotType::LineSymbol => 202,
        }
    }
}

/// Worksheet column designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnDesignation {
    X,
    Y,
    YError,
    XError,
    Label,
    Z,
    Disregard,
}

impl ColumnDesignation {
    /// Origin `wks.col.type` code. The documented table is off by one;
    /// these are the values the automation interface actually accepts.
    pub fn code(self) -> i32 {
        match self {
            ColumnDesignation::Y => 0,
            ColumnDesignation::Disregard => 1,
            ColumnDesignation::YError => 2,
            ColumnDesignation::X => 3,
            ColumnDesignation::Label => 4,
            ColumnDesignation::Z => 5,
            ColumnDesignation::XError => 6,
        }
    }
}

/// Default symbol used when a marker shape has no Origin equivalent.
pub const DEFAULT_SYMBOL_SHAPE: i32 = 2; // circle

/// Symbol interior code: open.
pub const OPEN_INTERIOR: i32 = 2;

/// Origin line widths are set as 500 x width-in-points.
pub const LINE_WIDTH_SCALE: f64 = 500.0;

/// Origin symbol edge widths are set as 10 x edge-width-in-points.
pub const EDGE_WIDTH_SCALE: f64 = 10.0;

/// Map a marker shape to Origin's symbol shape code.
///
/// Shapes with a direct equivalent use it; the rest degrade silently to
/// [`DEFAULT_SYMBOL_SHAPE`] (circle is the nearest round shape for all of
/// them).
pub fn symbol_shape_code(shape: MarkerShape) -> i32 {
    match shape {
        MarkerShape::Square => 1,
        MarkerShape::Circle => 2,
        MarkerShape::TriangleUp => 3,
        MarkerShape::TriangleDown => 4,
        MarkerShape::Diamond => 5,
        MarkerShape::Plus => 6,
        MarkerShape::Cross => 7,
        MarkerShape::Star => 8,
        MarkerShape::HLine => 9,
        MarkerShape::VLine => 10,
        MarkerShape::Hexagon => 17,
        MarkerShape::Pentagon => 19,
        MarkerShape::Point | MarkerShape::Octagon | MarkerShape::ThinDiamond => {
            debug!("no Origin symbol for {shape:?}, substituting circle");
            DEFAULT_SYMBOL_SHAPE
        }
    }
}

/// Map an axis scale to the LabTalk `layer.<axis>.type` code.
pub fn axis_type_code(scale: AxisScale) -> i32 {
    match scale {
        AxisScale::Linear => 0,
        AxisScale::Log => 2,
    }
}

/// Tick-label `numFormat` code paired with each scale: decimal labels on
/// linear axes, scientific on log axes.
pub fn axis_tick_format_code(scale: AxisScale) -> i32 {
    match scale {
        AxisScale::Linear => 1,
        AxisScale::Log => 2,
    }
}

/// Map a dash pattern to Origin's line-style code.
pub fn line_style_code(style: LineStyle) -> i32 {
    match style {
        LineStyle::Solid => 0,
        LineStyle::Dashed => 1,
        LineStyle::Dotted => 2,
        LineStyle::DashDot => 3,
    }
}

/// Symbol settings of one Origin plot object.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginSymbol {
    pub shape: i32,
    pub interior: i32,
    /// Symbol size in points (passed through unscaled).
    pub size: f64,
    pub edge_color: Rgb,
    pub face_color: Rgb,
    /// Edge width in Origin units (10 x points).
    pub edge_width: f64,
}

/// Line settings of one Origin plot object.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginLine {
    pub style: i32,
    pub color: Rgb,
    /// Line width in Origin units (500 x points).
    pub width: f64,
}

/// Complete mapped style for one plot object.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginPlotStyle {
    pub plot_type: PlotType,
    pub symbol: Option<OriginSymbol>,
    pub line: Option<OriginLine>,
}

/// Translate extracted style attributes into Origin's vocabulary.
///
/// Missing attribute blocks (a render kind that wants a line but no line
/// attributes were extracted) fall back to the source model defaults.
pub fn map_style(style: &StyleAttributes) -> OriginPlotStyle {
    let plot_type = match style.render {
        RenderKind::Line => PlotType::Line,
        RenderKind::Markers => PlotType::Scatter,
        RenderKind::LineMarkers => PlotType::LineSymbol,
    };

    let line = match style.render {
        RenderKind::Markers => None,
        RenderKind::Line | RenderKind::LineMarkers => {
            Some(map_line(style.line.clone().unwrap_or_default()))
        }
    };

    let symbol = match style.render {
        RenderKind::Line => None,
        RenderKind::Markers | RenderKind::LineMarkers => {
            Some(map_symbol(style.marker.clone().unwrap_or_default()))
        }
    };

    OriginPlotStyle {
        plot_type,
        symbol,
        line,
    }
}

fn map_line(attrs: LineStyleAttrs) -> OriginLine {
    OriginLine {
        style: line_style_code(attrs.style),
        color: attrs.color,
        width: LINE_WIDTH_SCALE * attrs.width,
    }
}

fn map_symbol(attrs: MarkerStyleAttrs) -> OriginSymbol {
    OriginSymbol {
        shape: symbol_shape_code(attrs.shape),
        interior: OPEN_INTERIOR,
        size: attrs.size,
        edge_color: attrs.edge_color,
        face_color: attrs.face_color,
        edge_width: EDGE_WIDTH_SCALE * attrs.edge_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_shape_codes() {
        assert_eq!(symbol_shape_code(MarkerShape::Square), 1);
        assert_eq!(symbol_shape_code(MarkerShape::Circle), 2);
        assert_eq!(symbol_shape_code(MarkerShape::TriangleUp), 3);
        assert_eq!(symbol_shape_code(MarkerShape::TriangleDown), 4);
        assert_eq!(symbol_shape_code(MarkerShape::Diamond), 5);
        assert_eq!(symbol_shape_code(MarkerShape::Plus), 6);
        assert_eq!(symbol_shape_code(MarkerShape::Cross), 7);
        assert_eq!(symbol_shape_code(MarkerShape::Star), 8);
        assert_eq!(symbol_shape_code(MarkerShape::HLine), 9);
        assert_eq!(symbol_shape_code(MarkerShape::VLine), 10);
        assert_eq!(symbol_shape_code(MarkerShape::Hexagon), 17);
        assert_eq!(symbol_shape_code(MarkerShape::Pentagon), 19);
    }

    #[test]
    fn test_unmappable_shapes_use_default() {
        assert_eq!(symbol_shape_code(MarkerShape::Point), DEFAULT_SYMBOL_SHAPE);
        assert_eq!(
            symbol_shape_code(MarkerShape::Octagon),
            DEFAULT_SYMBOL_SHAPE
        );
        assert_eq!(
            symbol_shape_code(MarkerShape::ThinDiamond),
            DEFAULT_SYMBOL_SHAPE
        );
    }

    #[test]
    fn test_mapping_is_stable() {
        // Mapping the same source value twice yields the same code.
        for shape in [
            MarkerShape::Square,
            MarkerShape::Star,
            MarkerShape::Point,
            MarkerShape::ThinDiamond,
        ] {
            assert_eq!(symbol_shape_code(shape), symbol_shape_code(shape));
        }
        for style in [
            LineStyle::Solid,
            LineStyle::Dashed,
            LineStyle::Dotted,
            LineStyle::DashDot,
        ] {
            assert_eq!(line_style_code(style), line_style_code(style));
        }
    }

    #[test]
    fn test_axis_scale_codes() {
        assert_eq!(axis_type_code(AxisScale::Linear), 0);
        assert_eq!(axis_type_code(AxisScale::Log), 2);
        assert_eq!(axis_tick_format_code(AxisScale::Linear), 1);
        assert_eq!(axis_tick_format_code(AxisScale::Log), 2);
    }

    #[test]
    fn test_line_style_codes() {
        assert_eq!(line_style_code(LineStyle::Solid), 0);
        assert_eq!(line_style_code(LineStyle::Dashed), 1);
        assert_eq!(line_style_code(LineStyle::Dotted), 2);
        assert_eq!(line_style_code(LineStyle::DashDot), 3);
    }

    #[test]
    fn test_plot_type_ids() {
        assert_eq!(PlotType::Line.id(), 200);
        assert_eq!(PlotType::Scatter.id(), 201);
        assert_eq!(PlotType::LineSymbol.id(), 202);
    }

    #[test]
    fn test_column_designation_codes() {
        assert_eq!(ColumnDesignation::Y.code(), 0);
        assert_eq!(ColumnDesignation::Disregard.code(), 1);
        assert_eq!(ColumnDesignation::YError.code(), 2);
        assert_eq!(ColumnDesignation::X.code(), 3);
        assert_eq!(ColumnDesignation::Label.code(), 4);
        assert_eq!(ColumnDesignation::Z.code(), 5);
        assert_eq!(ColumnDesignation::XError.code(), 6);
    }

    #[test]
    fn test_map_style_line_only() {
        let style = StyleAttributes::line(LineStyleAttrs {
            color: Rgb::new(255, 0, 0),
            style: LineStyle::Dashed,
            width: 2.0,
        });
        let mapped = map_style(&style);
        assert_eq!(mapped.plot_type, PlotType::Line);
        assert!(mapped.symbol.is_none());
        let line = mapped.line.unwrap();
        assert_eq!(line.style, 1);
        assert_eq!(line.color, Rgb::new(255, 0, 0));
        assert_eq!(line.width, 1000.0);
    }

    #[test]
    fn test_map_style_markers_only() {
        let style = StyleAttributes::markers(MarkerStyleAttrs {
            shape: MarkerShape::Diamond,
            size: 8.0,
            face_color: Rgb::new(0, 0, 255),
            edge_color: Rgb::new(0, 0, 0),
            edge_width: 0.5,
        });
        let mapped = map_style(&style);
        assert_eq!(mapped.plot_type, PlotType::Scatter);
        assert!(mapped.line.is_none());
        let symbol = mapped.symbol.unwrap();
        assert_eq!(symbol.shape, 5);
        assert_eq!(symbol.interior, OPEN_INTERIOR);
        assert_eq!(symbol.size, 8.0);
        assert_eq!(symbol.edge_width, 5.0);
    }

    #[test]
    fn test_map_style_line_markers() {
        let style = StyleAttributes::line_markers(Default::default(), Default::default());
        let mapped = map_style(&style);
        assert_eq!(mapped.plot_type, PlotType::LineSymbol);
        assert!(mapped.line.is_some());
        assert!(mapped.symbol.is_some());
    }
}

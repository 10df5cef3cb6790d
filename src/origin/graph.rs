//! Graph page property transfer.
//!
//! Copies axis scale, titles and ranges, the page size and the legend from
//! the source axis onto a graph page. Linear axes get decimal tick labels,
//! log axes scientific ones, matching what Origin's own scale switch does.
//!
//! Font sizes for axis and legend text are not transferred; whatever the
//! graph template defines stays in place.

use super::error::Result;
use super::session::{AxisKind, AxisProperties, GraphId, OriginSession};
use crate::config::TransferConfig;
use crate::figure::{Axis, Figure};
use crate::text::escape_math;

/// Unit labels gathered from the extracted series, used only as axis-title
/// text.
#[derive(Debug, Clone, Default)]
pub struct AxisUnits {
    pub x: Option<String>,
    pub y: Option<String>,
}

/// Apply the source axis' presentation to `graph`, honoring the config
/// switches.
pub fn apply_axis_properties<S: OriginSession + ?Sized>(
    session: &mut S,
    graph: GraphId,
    figure: &Figure,
    axis: &Axis,
    units: &AxisUnits,
    config: &TransferConfig,
) -> Result<()> {
    if config.transfer_axes {
        session.set_axis(
            graph,
            AxisKind::X,
            &AxisProperties {
                scale: axis.x_scale,
                title: axis_title(&axis.x_label, units.x.as_deref()),
                range: axis.x_limits,
            },
        )?;
        session.set_axis(
            graph,
            AxisKind::Y,
            &AxisProperties {
                scale: axis.y_scale,
                title: axis_title(&axis.y_label, units.y.as_deref()),
                range: axis.y_limits,
            },
        )?;
    }

    if config.apply_page_size {
        let (width, height) = figure.size_inches;
        session.set_graph_size(graph, width, height)?;
    }

    if config.transfer_legend {
        session.rebuild_legend(graph)?;
        if let Some(title) = &axis.legend_title {
            if !title.is_empty() {
                session.prepend_legend_title(graph, &escape_math(title))?;
            }
        }
    }

    Ok(())
}

/// Build an axis title from the source label and an optional unit tag.
///
/// The unit is appended as ` (unit)` unless the label already ends with the
/// parenthesized unit. A missing label with a unit yields just the unit;
/// neither yields `None`.
fn axis_title(label: &str, unit: Option<&str>) -> Option<String> {
    let text = escape_math(label);
    match unit {
        Some(u) if text.is_empty() => Some(u.to_string()),
        Some(u) if !text.ends_with(&format!("({u})")) => Some(format!("{text} ({u})")),
        _ if text.is_empty() => None,
        _ => Some(text),
    }
}

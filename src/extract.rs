//! Figure-to-series extraction.
//!
//! Walks the artifacts on one axis and produces a [`SeriesData`] +
//! [`StyleAttributes`] pair per supported artifact. Artifact kinds with no
//! mapping rule are skipped with a warning, not an error. Extraction only
//! borrows the axis; the source figure is never mutated.

use crate::figure::{Artifact, Axis, ErrorBarArtifact, StyleAttributes, UnitSeries};
use crate::origin::error::{OriginError, Result};
use crate::text::display_label;
use log::{debug, warn};

/// Ordered coordinate data of one series, stripped to bare magnitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Symmetric vertical error magnitudes, aligned with `y`.
    pub y_err: Option<Vec<f64>>,
    /// Unit label stripped from the x values, kept for axis/column text only.
    pub x_unit: Option<String>,
    /// Unit label stripped from the y values.
    pub y_unit: Option<String>,
    /// Display label, already converted to Origin text.
    pub label: Option<String>,
}

impl SeriesData {
    /// Check the x/y/error length invariants. `index` is the position of
    /// this series in its transfer batch, used in the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        let err_len = self.y_err.as_ref().map(Vec::len);
        let aligned = self.x.len() == self.y.len() && err_len.map_or(true, |n| n == self.y.len());
        if aligned {
            Ok(())
        } else {
            Err(OriginError::ShapeMismatch {
                series: index,
                x_len: self.x.len(),
                y_len: self.y.len(),
                err_len,
            })
        }
    }

    pub fn point_count(&self) -> usize {
        self.y.len()
    }
}

/// One extracted series: data plus visual attributes.
#[derive(Debug, Clone)]
pub struct ExtractedSeries {
    pub data: SeriesData,
    pub style: StyleAttributes,
}

/// Result of walking one axis.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub series: Vec<ExtractedSeries>,
    /// Kind names of artifacts that were skipped (no mapping rule).
    pub skipped: Vec<&'static str>,
}

/// Extract one series per supported artifact on `axis`, in plotting order.
pub fn extract_axis(axis: &Axis) -> Extraction {
    let mut out = Extraction::default();

    for artifact in &axis.artifacts {
        match artifact {
            Artifact::Line(a) => {
                out.series.push(ExtractedSeries {
                    data: series_data(&a.x, &a.y, None, a.label.as_deref()),
                    style: StyleAttributes::line(a.line.clone()),
                });
            }
            Artifact::Markers(a) => {
                out.series.push(ExtractedSeries {
                    data: series_data(&a.x, &a.y, None, a.label.as_deref()),
                    style: StyleAttributes::markers(a.marker.clone()),
                });
            }
            Artifact::LineMarkers(a) => {
                out.series.push(ExtractedSeries {
                    data: series_data(&a.x, &a.y, None, a.label.as_deref()),
                    style: StyleAttributes::line_markers(a.line.clone(), a.marker.clone()),
                });
            }
            Artifact::ErrorBars(a) => {
                out.series.push(extract_error_bars(a));
            }
            Artifact::FilledRegion(_) => {
                warn!(
                    "skipping unsupported artifact kind '{}'",
                    artifact.kind_name()
                );
                out.skipped.push(artifact.kind_name());
            }
        }
    }

    debug!(
        "extracted {} series from axis ({} skipped)",
        out.series.len(),
        out.skipped.len()
    );
    out
}

fn extract_error_bars(a: &ErrorBarArtifact) -> ExtractedSeries {
    if a.x_err.is_some() {
        // Horizontal error bars are not supported; the component is
        // recognized so it can be discarded rather than mis-read as y-error.
        warn!(
            "discarding horizontal error bars on series {:?}",
            a.label.as_deref().unwrap_or("<unlabeled>")
        );
    }

    let data = series_data(&a.x, &a.y, Some(a.y_err.clone()), a.label.as_deref());

    let style = match (&a.line, &a.marker) {
        (Some(line), Some(marker)) => StyleAttributes::line_markers(line.clone(), marker.clone()),
        (Some(line), None) => StyleAttributes::line(line.clone()),
        (None, Some(marker)) => StyleAttributes::markers(marker.clone()),
        (None, None) => StyleAttributes::line(Default::default()),
    };

    ExtractedSeries { data, style }
}

fn series_data(
    x: &UnitSeries,
    y: &UnitSeries,
    y_err: Option<Vec<f64>>,
    label: Option<&str>,
) -> SeriesData {
    SeriesData {
        x: x.values.clone(),
        y: y.values.clone(),
        y_err,
        x_unit: x.unit.clone(),
        y_unit: y.unit.clone(),
        label: label.and_then(display_label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{
        LineArtifact, LineStyleAttrs, MarkerStyleAttrs, RegionArtifact, RenderKind, Rgb, UnitSeries,
    };

    fn line_artifact(label: Option<&str>) -> Artifact {
        Artifact::Line(LineArtifact {
            x: UnitSeries::with_unit(vec![1.0, 2.0, 3.0], "s"),
            y: UnitSeries::with_unit(vec![10.0, 20.0, 30.0], "V"),
            label: label.map(String::from),
            line: LineStyleAttrs::default(),
        })
    }

    #[test]
    fn test_extract_strips_units_to_magnitudes() {
        let mut axis = Axis::new();
        axis.artifacts.push(line_artifact(Some("Model1")));

        let extraction = extract_axis(&axis);
        assert_eq!(extraction.series.len(), 1);
        let data = &extraction.series[0].data;
        assert_eq!(data.x, vec![1.0, 2.0, 3.0]);
        assert_eq!(data.x_unit.as_deref(), Some("s"));
        assert_eq!(data.y_unit.as_deref(), Some("V"));
        assert_eq!(data.label.as_deref(), Some("Model1"));
    }

    #[test]
    fn test_extract_hides_underscore_labels() {
        let mut axis = Axis::new();
        axis.artifacts.push(line_artifact(Some("_hidden")));

        let extraction = extract_axis(&axis);
        assert_eq!(extraction.series[0].data.label, None);
    }

    #[test]
    fn test_extract_discards_x_error() {
        let mut axis = Axis::new();
        axis.artifacts.push(Artifact::ErrorBars(ErrorBarArtifact {
            x: UnitSeries::bare(vec![1.0, 2.0]),
            y: UnitSeries::bare(vec![3.0, 4.0]),
            y_err: vec![0.1, 0.2],
            x_err: Some(vec![0.5, 0.5]),
            label: Some("E".into()),
            line: None,
            marker: Some(MarkerStyleAttrs::default()),
        }));

        let extraction = extract_axis(&axis);
        let series = &extraction.series[0];
        assert_eq!(series.data.y_err.as_deref(), Some(&[0.1, 0.2][..]));
        assert_eq!(series.style.render, RenderKind::Markers);
        // The x-error never reaches SeriesData in any form.
        assert_eq!(series.data.x, vec![1.0, 2.0]);
    }

    #[test]
    fn test_extract_skips_filled_region() {
        let mut axis = Axis::new();
        axis.artifacts.push(Artifact::FilledRegion(RegionArtifact {
            x: UnitSeries::bare(vec![0.0, 1.0]),
            lower: vec![0.0, 0.0],
            upper: vec![1.0, 1.0],
            label: None,
            fill_color: Rgb::new(200, 200, 255),
        }));
        axis.artifacts.push(line_artifact(Some("kept")));

        let extraction = extract_axis(&axis);
        assert_eq!(extraction.series.len(), 1);
        assert_eq!(extraction.skipped, vec!["filled-region"]);
    }

    #[test]
    fn test_validate_shape_mismatch() {
        let data = SeriesData {
            x: vec![1.0, 2.0],
            y: vec![1.0],
            y_err: None,
            x_unit: None,
            y_unit: None,
            label: None,
        };
        let err = data.validate(3).unwrap_err();
        match err {
            OriginError::ShapeMismatch {
                series,
                x_len,
                y_len,
                err_len,
            } => {
                assert_eq!(series, 3);
                assert_eq!((x_len, y_len, err_len), (2, 1, None));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_error_alignment() {
        let data = SeriesData {
            x: vec![1.0, 2.0],
            y: vec![1.0, 2.0],
            y_err: Some(vec![0.1]),
            x_unit: None,
            y_unit: None,
            label: None,
        };
        assert!(data.validate(0).is_err());
    }
}

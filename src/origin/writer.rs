//! Destination writer.
//!
//! Locates (or creates) the workbook, worksheet and graph named by a
//! [`DestinationLocator`], writes each series as fresh worksheet columns and
//! creates one styled plot object per series. Columns are always appended
//! after the sheet's existing columns and plots stack in call order, so
//! repeated calls with the same locator accumulate data — the operation is
//! deliberately NOT idempotent, and a retry after a partial failure can
//! duplicate data. That trade-off belongs to the caller.

use super::error::{OriginError, Result};
use super::session::{ColumnSpec, GraphId, OriginSession, PlotSpec, WorksheetId};
use super::style::{map_style, ColumnDesignation};
use crate::config::TransferConfig;
use crate::extract::ExtractedSeries;
use crate::theme::THEME_REGISTRY;
use log::{debug, warn};

/// Names of the remote objects a transfer targets. Missing objects are
/// created; existing ones are reused (and appended to).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationLocator {
    /// Project folder, made current before anything else when set.
    pub folder: Option<String>,
    pub workbook: String,
    pub worksheet: String,
    pub graph: String,
}

impl DestinationLocator {
    pub fn new(
        workbook: impl Into<String>,
        worksheet: impl Into<String>,
        graph: impl Into<String>,
    ) -> Self {
        DestinationLocator {
            folder: None,
            workbook: workbook.into(),
            worksheet: worksheet.into(),
            graph: graph.into(),
        }
    }

    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }
}

/// What one transfer call did.
#[derive(Debug)]
pub struct TransferReport {
    pub worksheet: WorksheetId,
    pub graph: GraphId,
    pub plots_created: usize,
    pub columns_written: usize,
    /// Kind names of artifacts skipped during extraction.
    pub skipped_artifacts: Vec<&'static str>,
    /// Series that failed validation, with the error. Nothing was written
    /// for these.
    pub failed_series: Vec<(usize, OriginError)>,
}

/// Write extracted series into the located workbook/worksheet/graph.
///
/// Series are processed in order; order determines both worksheet column
/// order and plot z-order. A series failing shape validation is recorded in
/// the report and skipped before any remote call is made for it; the
/// remaining series still transfer.
pub fn write_series<S: OriginSession + ?Sized>(
    session: &mut S,
    locator: &DestinationLocator,
    series: &[ExtractedSeries],
    config: &TransferConfig,
) -> Result<TransferReport> {
    if let Some(folder) = &locator.folder {
        session.ensure_folder(folder)?;
    }

    let workbook = match session.find_workbook(&locator.workbook)? {
        Some(id) => id,
        None => session.create_workbook(&locator.workbook)?,
    };
    let worksheet = match session.find_worksheet(workbook, &locator.worksheet)? {
        Some(id) => id,
        None => session.add_worksheet(workbook, &locator.worksheet)?,
    };
    let graph = match session.find_graph(&locator.graph)? {
        Some(id) => id,
        None => session.create_graph(&locator.graph, &config.template)?,
    };

    let mut report = TransferReport {
        worksheet,
        graph,
        plots_created: 0,
        columns_written: 0,
        skipped_artifacts: Vec::new(),
        failed_series: Vec::new(),
    };

    // New columns go after whatever a previous transfer left on the sheet,
    // and new plots likewise stack after any existing plot objects.
    let mut next_column = session.column_count(worksheet)?;
    let existing_plots = session.plot_count(graph)?;

    for (index, entry) in series.iter().enumerate() {
        // Shape check before any remote write for this series.
        if let Err(e) = entry.data.validate(index) {
            warn!("rejecting series {index}: {e}");
            report.failed_series.push((index, e));
            continue;
        }

        let data = &entry.data;
        let x_column = next_column;
        let y_column = next_column + 1;
        let y_error_column = data.y_err.as_ref().map(|_| next_column + 2);
        let series_columns = if data.y_err.is_some() { 3 } else { 2 };
        next_column += series_columns;

        session.set_column(
            worksheet,
            x_column,
            &ColumnSpec {
                designation: ColumnDesignation::X,
                long_name: "X".to_string(),
                units: data.x_unit.clone().unwrap_or_default(),
                comments: String::new(),
                values: data.x.clone(),
            },
        )?;
        session.set_column(
            worksheet,
            y_column,
            &ColumnSpec {
                designation: ColumnDesignation::Y,
                long_name: "Y".to_string(),
                units: data.y_unit.clone().unwrap_or_default(),
                comments: data.label.clone().unwrap_or_default(),
                values: data.y.clone(),
            },
        )?;
        if let (Some(column), Some(err)) = (y_error_column, &data.y_err) {
            session.set_column(
                worksheet,
                column,
                &ColumnSpec {
                    designation: ColumnDesignation::YError,
                    long_name: "Y Error".to_string(),
                    units: data.y_unit.clone().unwrap_or_default(),
                    comments: String::new(),
                    values: err.clone(),
                },
            )?;
        }
        report.columns_written += series_columns;

        let style = map_style(&entry.style);
        let plot = session.add_plot(
            graph,
            &PlotSpec {
                worksheet,
                x_column,
                y_column,
                y_error_column,
                plot_type: style.plot_type,
            },
        )?;
        session.set_plot_style(plot, &style)?;
        report.plots_created += 1;

        debug!(
            "series {index} -> columns {x_column}..{next_column}, plot {:?}",
            plot
        );
    }

    // Group only the plots this call created; an appending transfer must
    // not re-group an earlier call's plots.
    if config.group_series && report.plots_created > 1 {
        session.group_plots(
            graph,
            existing_plots + 1,
            existing_plots + report.plots_created,
        )?;
    }

    if report.plots_created > 0 {
        if let Some(name) = &config.color_theme {
            let theme = THEME_REGISTRY
                .get(name)
                .ok_or_else(|| OriginError::Theme(format!("unknown theme '{name}'")))?;
            session.import_color_theme(graph, name, &theme.colors_rgb())?;
        }
        if config.rescale {
            session.rescale(graph)?;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::SeriesData;
    use crate::figure::{LineStyleAttrs, StyleAttributes};
    use crate::origin::recording::RecordingSession;

    fn series(x: Vec<f64>, y: Vec<f64>) -> ExtractedSeries {
        ExtractedSeries {
            data: SeriesData {
                x,
                y,
                y_err: None,
                x_unit: None,
                y_unit: None,
                label: None,
            },
            style: StyleAttributes::line(LineStyleAttrs::default()),
        }
    }

    #[test]
    fn test_shape_mismatch_writes_nothing_for_that_series() {
        let mut session = RecordingSession::new();
        let locator = DestinationLocator::new("Book1", "Sheet1", "Graph1");
        let bad = series(vec![1.0, 2.0], vec![1.0]);

        let report =
            write_series(&mut session, &locator, &[bad], &TransferConfig::default()).unwrap();

        assert_eq!(report.plots_created, 0);
        assert_eq!(report.columns_written, 0);
        assert_eq!(report.failed_series.len(), 1);
        // No column or plot call reached the session.
        assert!(!session.calls().contains(&"set_column"));
        assert!(!session.calls().contains(&"add_plot"));
        let sheet = session.worksheet(report.worksheet).unwrap();
        assert!(sheet.columns.is_empty());
    }

    #[test]
    fn test_bad_series_does_not_block_good_ones() {
        let mut session = RecordingSession::new();
        let locator = DestinationLocator::new("Book1", "Sheet1", "Graph1");
        let bad = series(vec![1.0, 2.0], vec![1.0]);
        let good = series(vec![1.0, 2.0], vec![3.0, 4.0]);

        let report = write_series(
            &mut session,
            &locator,
            &[bad, good],
            &TransferConfig::default(),
        )
        .unwrap();

        assert_eq!(report.plots_created, 1);
        assert_eq!(report.columns_written, 2);
        assert_eq!(report.failed_series.len(), 1);
        assert_eq!(report.failed_series[0].0, 0);
    }

    #[test]
    fn test_repeat_transfer_appends() {
        let mut session = RecordingSession::new();
        let locator = DestinationLocator::new("Book1", "Sheet1", "Graph1");
        let config = TransferConfig::default();

        write_series(&mut session, &locator, &[series(vec![1.0], vec![2.0])], &config).unwrap();
        let report =
            write_series(&mut session, &locator, &[series(vec![3.0], vec![4.0])], &config).unwrap();

        let sheet = session.worksheet(report.worksheet).unwrap();
        assert_eq!(sheet.columns.len(), 4);
        assert_eq!(session.plots_on(report.graph).len(), 2);
        // Second series' plot references the appended columns.
        let plots = session.plots_on(report.graph);
        assert_eq!(plots[1].spec.x_column, 2);
        assert_eq!(plots[1].spec.y_column, 3);
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        let mut session = RecordingSession::new();
        let locator = DestinationLocator::new("Book1", "Sheet1", "Graph1");
        let config = TransferConfig {
            color_theme: Some("NoSuchTheme".to_string()),
            ..TransferConfig::default()
        };

        let err = write_series(
            &mut session,
            &locator,
            &[series(vec![1.0], vec![2.0])],
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, OriginError::Theme(_)));
    }

    #[test]
    fn test_theme_import_requires_plots() {
        let mut session = RecordingSession::new();
        let locator = DestinationLocator::new("Book1", "Sheet1", "Graph1");
        let config = TransferConfig {
            color_theme: Some("Classic".to_string()),
            ..TransferConfig::default()
        };
        let bad = series(vec![1.0, 2.0], vec![1.0]);

        let report = write_series(&mut session, &locator, &[bad], &config).unwrap();

        assert_eq!(report.plots_created, 0);
        let graph = session.graph(report.graph).unwrap();
        assert!(graph.color_theme.is_none());
        assert!(!graph.rescaled);
    }

    #[test]
    fn test_folder_is_ensured_first() {
        let mut session = RecordingSession::new();
        let locator = DestinationLocator::new("Book1", "Sheet1", "Graph1").in_folder("Project/Run1");

        write_series(
            &mut session,
            &locator,
            &[series(vec![1.0], vec![2.0])],
            &TransferConfig::default(),
        )
        .unwrap();

        assert_eq!(session.calls()[0], "ensure_folder");
        assert_eq!(session.folders(), &["Project/Run1".to_string()][..]);
    }
}

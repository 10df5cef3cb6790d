//! Top-level transfer entry points.
//!
//! `transfer_axis` is the single meaningful flow: extract the series from
//! one axis, write them through the session, then carry the axis and legend
//! presentation over. `transfer_figure` loops it over every axis of a
//! figure.

use crate::config::TransferConfig;
use crate::extract::extract_axis;
use crate::figure::Figure;
use crate::origin::error::{OriginError, Result};
use crate::origin::graph::{apply_axis_properties, AxisUnits};
use crate::origin::session::OriginSession;
use crate::origin::writer::{write_series, DestinationLocator, TransferReport};

/// Transfer one axis of `figure` into the destination named by `locator`.
///
/// Calling this twice with the same locator appends columns and plots; see
/// the writer module for the non-idempotence contract.
pub fn transfer_axis<S: OriginSession + ?Sized>(
    session: &mut S,
    figure: &Figure,
    axis_index: usize,
    locator: &DestinationLocator,
    config: &TransferConfig,
) -> Result<TransferReport> {
    let axis = figure
        .axes
        .get(axis_index)
        .ok_or(OriginError::NoSuchAxis(axis_index))?;

    let extraction = extract_axis(axis);

    // First unit tag wins; all series on an axis share its coordinate units.
    let units = AxisUnits {
        x: extraction
            .series
            .iter()
            .find_map(|s| s.data.x_unit.clone()),
        y: extraction
            .series
            .iter()
            .find_map(|s| s.data.y_unit.clone()),
    };

    let mut report = write_series(session, locator, &extraction.series, config)?;
    report.skipped_artifacts = extraction.skipped;

    apply_axis_properties(session, report.graph, figure, axis, &units, config)?;

    Ok(report)
}

/// Transfer every axis of `figure`, one worksheet and graph per axis.
///
/// The first axis uses the locator's names as given; later axes get a
/// numeric suffix (`Sheet`, `Sheet2`, ... / `Graph`, `Graph2`, ...).
pub fn transfer_figure<S: OriginSession + ?Sized>(
    session: &mut S,
    figure: &Figure,
    locator: &DestinationLocator,
    config: &TransferConfig,
) -> Result<Vec<TransferReport>> {
    let mut reports = Vec::with_capacity(figure.axes.len());
    for index in 0..figure.axes.len() {
        let axis_locator = if index == 0 {
            locator.clone()
        } else {
            DestinationLocator {
                folder: locator.folder.clone(),
                workbook: locator.workbook.clone(),
                worksheet: format!("{}{}", locator.worksheet, index + 1),
                graph: format!("{}{}", locator.graph, index + 1),
            }
        };
        reports.push(transfer_axis(
            session,
            figure,
            index,
            &axis_locator,
            config,
        )?);
    }
    Ok(reports)
}

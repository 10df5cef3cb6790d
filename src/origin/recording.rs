//! In-memory Origin session.
//!
//! [`RecordingSession`] emulates the slice of Origin's object model the
//! bridge drives: project folders, workbook pages with worksheet layers and
//! columns, graph pages with plot objects. The test suite asserts against
//! the recorded state; callers can also use it to dry-run a transfer without
//! a live Origin process.
//!
//! Emulated faithfully: append-only columns, find-vs-create distinction,
//! plot z-order, per-graph axis/legend/theme state. Not emulated: rendering,
//! rescale math, LabTalk side effects.

use super::error::{OriginError, Result};
use super::session::{
    AxisKind, AxisProperties, ColumnSpec, GraphId, OriginSession, PlotId, PlotSpec, WorkbookId,
    WorksheetId,
};
use super::style::OriginPlotStyle;
use crate::figure::Rgb;

/// A recorded workbook page.
#[derive(Debug, Clone, Default)]
pub struct RecordedWorkbook {
    pub name: String,
    pub sheets: Vec<WorksheetId>,
}

/// A recorded worksheet layer.
#[derive(Debug, Clone)]
pub struct RecordedWorksheet {
    pub name: String,
    pub workbook: WorkbookId,
    pub columns: Vec<ColumnSpec>,
}

/// A recorded graph page.
#[derive(Debug, Clone)]
pub struct RecordedGraph {
    pub name: String,
    pub template: String,
    pub plots: Vec<PlotId>,
    pub x_axis: Option<AxisProperties>,
    pub y_axis: Option<AxisProperties>,
    /// Page size in inches, if set.
    pub size_inches: Option<(f64, f64)>,
    /// Grouped plot ranges (1-based, inclusive).
    pub groups: Vec<(usize, usize)>,
    pub legend_rebuilt: bool,
    pub legend_title: Option<String>,
    /// Imported color-increment theme, if any.
    pub color_theme: Option<(String, Vec<Rgb>)>,
    pub rescaled: bool,
}

/// A recorded plot object.
#[derive(Debug, Clone)]
pub struct RecordedPlot {
    pub graph: GraphId,
    pub spec: PlotSpec,
    pub style: Option<OriginPlotStyle>,
}

/// In-memory [`OriginSession`] implementation.
#[derive(Debug, Default)]
pub struct RecordingSession {
    disconnected: bool,
    folders: Vec<String>,
    workbooks: Vec<RecordedWorkbook>,
    worksheets: Vec<RecordedWorksheet>,
    graphs: Vec<RecordedGraph>,
    plots: Vec<RecordedPlot>,
    calls: Vec<&'static str>,
}

impl RecordingSession {
    pub fn new() -> Self {
        RecordingSession::default()
    }

    /// Simulate the Origin process going away. Every subsequent operation
    /// fails with `SessionUnavailable`.
    pub fn disconnect(&mut self) {
        self.disconnected = true;
    }

    /// Names of the operations invoked so far, in order.
    pub fn calls(&self) -> &[&'static str] {
        &self.calls
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    pub fn workbook_by_name(&self, name: &str) -> Option<&RecordedWorkbook> {
        self.workbooks.iter().find(|wb| wb.name == name)
    }

    pub fn worksheet(&self, id: WorksheetId) -> Option<&RecordedWorksheet> {
        self.worksheets.get(id.0)
    }

    pub fn graph(&self, id: GraphId) -> Option<&RecordedGraph> {
        self.graphs.get(id.0)
    }

    pub fn graph_by_name(&self, name: &str) -> Option<&RecordedGraph> {
        self.graphs.iter().find(|g| g.name == name)
    }

    pub fn plot(&self, id: PlotId) -> Option<&RecordedPlot> {
        self.plots.get(id.0)
    }

    /// Plot objects on a graph, in z-order.
    pub fn plots_on(&self, graph: GraphId) -> Vec<&RecordedPlot> {
        self.plots.iter().filter(|p| p.graph == graph).collect()
    }

    fn begin(&mut self, op: &'static str) -> Result<()> {
        if self.disconnected {
            return Err(OriginError::SessionUnavailable(format!(
                "no connection to Origin ({op})"
            )));
        }
        self.calls.push(op);
        Ok(())
    }

    fn workbook_mut(&mut self, id: WorkbookId) -> Result<&mut RecordedWorkbook> {
        self.workbooks
            .get_mut(id.0)
            .ok_or_else(|| OriginError::StaleHandle(format!("workbook {}", id.0)))
    }

    fn worksheet_mut(&mut self, id: WorksheetId) -> Result<&mut RecordedWorksheet> {
        self.worksheets
            .get_mut(id.0)
            .ok_or_else(|| OriginError::StaleHandle(format!("worksheet {}", id.0)))
    }

    fn graph_mut(&mut self, id: GraphId) -> Result<&mut RecordedGraph> {
        self.graphs
            .get_mut(id.0)
            .ok_or_else(|| OriginError::StaleHandle(format!("graph {}", id.0)))
    }

    fn plot_mut(&mut self, id: PlotId) -> Result<&mut RecordedPlot> {
        self.plots
            .get_mut(id.0)
            .ok_or_else(|| OriginError::StaleHandle(format!("plot {}", id.0)))
    }
}

impl OriginSession for RecordingSession {
    fn ensure_folder(&mut self, path: &str) -> Result<()> {
        self.begin("ensure_folder")?;
        if !self.folders.iter().any(|f| f == path) {
            self.folders.push(path.to_string());
        }
        Ok(())
    }

    fn find_workbook(&mut self, name: &str) -> Result<Option<WorkbookId>> {
        self.begin("find_workbook")?;
        Ok(self
            .workbooks
            .iter()
            .position(|wb| wb.name == name)
            .map(WorkbookId))
    }

    fn create_workbook(&mut self, name: &str) -> Result<WorkbookId> {
        self.begin("create_workbook")?;
        self.workbooks.push(RecordedWorkbook {
            name: name.to_string(),
            sheets: Vec::new(),
        });
        Ok(WorkbookId(self.workbooks.len() - 1))
    }

    fn find_worksheet(&mut self, workbook: WorkbookId, name: &str) -> Result<Option<WorksheetId>> {
        self.begin("find_worksheet")?;
        let wb = self.workbook_mut(workbook)?;
        let sheets = wb.sheets.clone();
        Ok(sheets
            .into_iter()
            .find(|&id| self.worksheets[id.0].name == name))
    }

    fn add_worksheet(&mut self, workbook: WorkbookId, name: &str) -> Result<WorksheetId> {
        self.begin("add_worksheet")?;
        self.workbook_mut(workbook)?;
        let id = WorksheetId(self.worksheets.len());
        self.worksheets.push(RecordedWorksheet {
            name: name.to_string(),
            workbook,
            columns: Vec::new(),
        });
        self.workbook_mut(workbook)?.sheets.push(id);
        Ok(id)
    }

    fn column_count(&mut self, worksheet: WorksheetId) -> Result<usize> {
        self.begin("column_count")?;
        Ok(self.worksheet_mut(worksheet)?.columns.len())
    }

    fn set_column(
        &mut self,
        worksheet: WorksheetId,
        index: usize,
        column: &ColumnSpec,
    ) -> Result<()> {
        self.begin("set_column")?;
        let sheet = self.worksheet_mut(worksheet)?;
        if index > sheet.columns.len() {
            return Err(OriginError::Automation(format!(
                "column index {index} past end of worksheet '{}' ({} columns)",
                sheet.name,
                sheet.columns.len()
            )));
        }
        if index == sheet.columns.len() {
            sheet.columns.push(column.clone());
        } else {
            sheet.columns[index] = column.clone();
        }
        Ok(())
    }

    fn find_graph(&mut self, name: &str) -> Result<Option<GraphId>> {
        self.begin("find_graph")?;
        Ok(self.graphs.iter().position(|g| g.name == name).map(GraphId))
    }

    fn create_graph(&mut self, name: &str, template: &str) -> Result<GraphId> {
        self.begin("create_graph")?;
        self.graphs.push(RecordedGraph {
            name: name.to_string(),
            template: template.to_string(),
            plots: Vec::new(),
            x_axis: None,
            y_axis: None,
            size_inches: None,
            groups: Vec::new(),
            legend_rebuilt: false,
            legend_title: None,
            color_theme: None,
            rescaled: false,
        });
        Ok(GraphId(self.graphs.len() - 1))
    }

    fn plot_count(&mut self, graph: GraphId) -> Result<usize> {
        self.begin("plot_count")?;
        Ok(self.graph_mut(graph)?.plots.len())
    }

    fn add_plot(&mut self, graph: GraphId, plot: &PlotSpec) -> Result<PlotId> {
        self.begin("add_plot")?;
        let sheet = self.worksheet_mut(plot.worksheet)?;
        let n_cols = sheet.columns.len();
        let mut referenced = vec![plot.x_column, plot.y_column];
        referenced.extend(plot.y_error_column);
        if let Some(&bad) = referenced.iter().find(|&&c| c >= n_cols) {
            return Err(OriginError::Automation(format!(
                "plot references column {bad} but worksheet has {n_cols}"
            )));
        }
        self.graph_mut(graph)?;
        let id = PlotId(self.plots.len());
        self.plots.push(RecordedPlot {
            graph,
            spec: *plot,
            style: None,
        });
        self.graph_mut(graph)?.plots.push(id);
        Ok(id)
    }

    fn set_plot_style(&mut self, plot: PlotId, style: &OriginPlotStyle) -> Result<()> {
        self.begin("set_plot_style")?;
        self.plot_mut(plot)?.style = Some(style.clone());
        Ok(())
    }

    fn set_axis(
        &mut self,
        graph: GraphId,
        axis: AxisKind,
        properties: &AxisProperties,
    ) -> Result<()> {
        self.begin("set_axis")?;
        let g = self.graph_mut(graph)?;
        match axis {
            AxisKind::X => g.x_axis = Some(properties.clone()),
            AxisKind::Y => g.y_axis = Some(properties.clone()),
        }
        Ok(())
    }

    fn set_graph_size(
        &mut self,
        graph: GraphId,
        width_inches: f64,
        height_inches: f64,
    ) -> Result<()> {
        self.begin("set_graph_size")?;
        self.graph_mut(graph)?.size_inches = Some((width_inches, height_inches));
        Ok(())
    }

    fn group_plots(&mut self, graph: GraphId, first: usize, last: usize) -> Result<()> {
        self.begin("group_plots")?;
        let g = self.graph_mut(graph)?;
        if first == 0 || last < first || last > g.plots.len() {
            return Err(OriginError::Automation(format!(
                "invalid plot group {first}..{last} on graph '{}' with {} plots",
                g.name,
                g.plots.len()
            )));
        }
        g.groups.push((first, last));
        Ok(())
    }

    fn rebuild_legend(&mut self, graph: GraphId) -> Result<()> {
        self.begin("rebuild_legend")?;
        self.graph_mut(graph)?.legend_rebuilt = true;
        Ok(())
    }

    fn prepend_legend_title(&mut self, graph: GraphId, title: &str) -> Result<()> {
        self.begin("prepend_legend_title")?;
        self.graph_mut(graph)?.legend_title = Some(title.to_string());
        Ok(())
    }

    fn import_color_theme(&mut self, graph: GraphId, name: &str, colors: &[Rgb]) -> Result<()> {
        self.begin("import_color_theme")?;
        self.graph_mut(graph)?.color_theme = Some((name.to_string(), colors.to_vec()));
        Ok(())
    }

    fn rescale(&mut self, graph: GraphId) -> Result<()> {
        self.begin("rescale")?;
        self.graph_mut(graph)?.rescaled = true;
        Ok(())
    }
}

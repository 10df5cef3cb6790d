//! Transfer configuration.
//!
//! Everything here is optional behavior on top of the core data transfer;
//! the defaults reproduce a full "make the graph look like the figure" run.

/// Options controlling one transfer call.
#[derive(Debug, Clone)]
pub struct TransferConfig {
    /// Origin graph template used when the graph page has to be created.
    pub template: String,

    /// Named color-increment theme to import into the graph (see the
    /// `theme` module for the bundled names). `None` leaves Origin's own
    /// increment list in place.
    pub color_theme: Option<String>,

    /// Group the plots created by this call so Origin's color increment
    /// and shared legend entries apply across them.
    pub group_series: bool,

    /// Copy axis scale, titles and ranges from the source axis.
    pub transfer_axes: bool,

    /// Rebuild the legend and carry over the legend title.
    /// Font sizes are not transferred; the template's values stay.
    pub transfer_legend: bool,

    /// Set the graph page size from the figure's size in inches.
    pub apply_page_size: bool,

    /// Rescale the graph layer to its data after plotting.
    pub rescale: bool,
}

impl Default for TransferConfig {
    fn default() -> Self {
        TransferConfig {
            template: "LINE.otp".to_string(),
            color_theme: None,
            group_series: false,
            transfer_axes: true,
            transfer_legend: true,
            apply_page_size: true,
            rescale: true,
        }
    }
}

impl TransferConfig {
    pub fn new() -> Self {
        TransferConfig::default()
    }

    /// Data-only transfer: columns and plots, no axis/legend/page styling.
    pub fn data_only() -> Self {
        TransferConfig {
            transfer_axes: false,
            transfer_legend: false,
            apply_page_size: false,
            rescale: false,
            ..TransferConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransferConfig::default();
        assert_eq!(config.template, "LINE.otp");
        assert!(config.transfer_axes);
        assert!(config.rescale);
        assert_eq!(config.color_theme, None);
    }

    #[test]
    fn test_data_only_config() {
        let config = TransferConfig::data_only();
        assert!(!config.transfer_axes);
        assert!(!config.transfer_legend);
        assert_eq!(config.template, "LINE.otp");
    }
}

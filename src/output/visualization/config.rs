//! Plot configuration shared across visualization modules
//!
//! This module defines the configuration used by both the density panel
//! and the SFR sweep plotting functions. Law colors are a presentation
//! concern and live here only.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Fallback line color
/// - `law_colors`: Color of each law, by name
/// - `series_colors`: Optional colors for plots with several series of one law
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
/// - `log_y`: Logarithmic y axis for sweep plots
/// - `fill_opacity`: Opacity of the region above the critical density
///
/// # Example
///
/// ```rust
/// use sflaws::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::sfr_sweep("Mach dependence");
/// config.log_y = true;
/// config.width = 1920;
/// assert_eq!(config.law_color("KM2005"), RGBColor(0, 0, 255));
/// assert_eq!(config.law_color("unknown"), config.line_color);
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: auto-set by plot type)
    pub ylabel: String,

    /// Line color when a law has no assigned color (default: BLACK)
    pub line_color: RGBColor,

    /// Color of each law, keyed by [`StarFormationLaw::name`](crate::physics::StarFormationLaw::name)
    pub law_colors: Vec<(String, RGBColor)>,

    /// Optional colors for several series of the same law
    ///
    /// If None, uses default palette: [RED, BLUE, GREEN, MAGENTA, CYAN, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Logarithmic y axis in sweep plots (default: false)
    pub log_y: bool,

    /// Opacity of the filled collapse region (default: 0.5)
    pub fill_opacity: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),  // Set by specific plot type
            ylabel: String::new(),
            line_color: BLACK,
            law_colors: default_law_colors(),
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
            log_y: false,
            fill_opacity: 0.5,
        }
    }
}

fn default_law_colors() -> Vec<(String, RGBColor)> {
    vec![
        ("KM2005".to_string(), BLUE),
        ("PN2011".to_string(), RED),
        ("HC2011".to_string(), GREEN),
        ("HC2011_multiff".to_string(), MAGENTA),
        ("Burkhart2018".to_string(), RGBColor(255, 165, 0)), // Orange
    ]
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust
/// use sflaws::output::visualization::{PlotConfig, NO_TITLE};
///
/// let config = PlotConfig::density_panels(NO_TITLE);
/// assert_eq!(config.title, "Density PDF");
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for Mach × Beta density panels with optional custom title
    ///
    /// Sets xlabel to "Overdensity", a square canvas, and title to the
    /// custom value or "Density PDF"
    ///
    /// ```rust
    /// use sflaws::output::visualization::PlotConfig;
    ///
    /// let config = PlotConfig::density_panels("KM2005");
    /// assert_eq!(config.title, "KM2005");
    /// ```
    pub fn density_panels(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.width = 1200;
        config.height = 1200;
        config.xlabel = "Overdensity".to_string();
        config.ylabel = "P(s)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Density PDF".to_string());
        config
    }

    /// Create config for SFR sweeps with optional custom title
    ///
    /// Sets xlabel to "Mach", ylabel to "SFR_ff", title to custom value or
    /// "Star Formation Rate"
    pub fn sfr_sweep(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Mach".to_string();
        config.ylabel = "SFR_ff".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Star Formation Rate".to_string());
        config
    }

    /// Create config with custom colors for several series of one law
    pub fn multi_series_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.series_colors = Some(colors);
        config
    }

    /// Builder pattern: set the color of a law
    pub fn with_law_color(mut self, law: &str, color: RGBColor) -> Self {
        match self.law_colors.iter_mut().find(|(name, _)| name == law) {
            Some(entry) => entry.1 = color,
            None => self.law_colors.push((law.to_string(), color)),
        }
        self
    }

    /// Color assigned to a law, `line_color` when it has none
    pub fn law_color(&self, law: &str) -> RGBColor {
        self.law_colors
            .iter()
            .find(|(name, _)| name == law)
            .map(|(_, color)| *color)
            .unwrap_or(self.line_color)
    }

    /// Get color for series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors
            && series_index < colors.len()
        {
            return colors[series_index];
        }

        // Default palette
        let default_colors = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),  // Orange
            RGBColor(128, 0, 128),   // Purple
            RGBColor(255, 192, 203), // Pink
            RGBColor(165, 42, 42),   // Brown
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
        assert!(!config.log_y);
    }

    #[test]
    fn test_density_panels_config_default() {
        let config = PlotConfig::density_panels(NO_TITLE);
        assert_eq!(config.xlabel, "Overdensity");
        assert_eq!(config.title, "Density PDF");
        assert_eq!(config.width, config.height);
    }

    #[test]
    fn test_sfr_sweep_config_with_string() {
        let title = format!("SFR: {}", "KM2005");
        let config = PlotConfig::sfr_sweep(title);
        assert_eq!(config.xlabel, "Mach");
        assert_eq!(config.title, "SFR: KM2005");
    }

    #[test]
    fn test_law_colors() {
        let config = PlotConfig::default();
        assert_eq!(config.law_color("KM2005"), BLUE);
        assert_eq!(config.law_color("PN2011"), RED);
        assert_eq!(config.law_color("Padoan"), BLACK);
    }

    #[test]
    fn test_with_law_color() {
        let config = PlotConfig::default()
            .with_law_color("KM2005", CYAN)
            .with_law_color("Custom", GREEN);
        assert_eq!(config.law_color("KM2005"), CYAN);
        assert_eq!(config.law_color("Custom"), GREEN);
    }

    #[test]
    fn test_get_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), RED);
        assert_eq!(config.get_series_color(1), BLUE);
        assert_eq!(config.get_series_color(10), RED); // Wraparound
    }

    #[test]
    fn test_get_series_color_custom() {
        use plotters::style::full_palette::{LIGHTBLUE, LIGHTGREEN, ORANGE};
        let config = PlotConfig::multi_series_colors(vec![ORANGE, LIGHTGREEN, LIGHTBLUE]);
        assert_eq!(config.get_series_color(0), ORANGE);
        assert_eq!(config.get_series_color(1), LIGHTGREEN);
        assert_eq!(config.get_series_color(3), MAGENTA); // Falls back to the palette
    }
}

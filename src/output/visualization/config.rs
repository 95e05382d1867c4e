//! Plot configuration shared by the profile plots

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-profile plots
/// - `series_colors`: Optional colors for multi-profile plots (one per profile)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::profile("Step diffusion");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
///
/// assert_eq!(config.xlabel, "Position x");
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: "Concentration")
    pub ylabel: String,

    /// Line color for single-profile plots (default: BLUE)
    pub line_color: RGBColor,

    /// Optional colors for multi-profile plots
    ///
    /// If None, uses default palette: [BLUE, RED, GREEN, MAGENTA, CYAN, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(), // Set by specific plot type
            ylabel: "Concentration".to_string(),
            line_color: BLUE,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
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
/// use diffusion_rs::output::visualization::{PlotConfig, NO_TITLE};
///
/// let config = PlotConfig::profile(NO_TITLE);
/// assert_eq!(config.title, "Concentration Profile");
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for a spatial profile with optional custom title
    ///
    /// Sets xlabel to "Position x" and title to custom value or "Concentration Profile"
    ///
    /// # Examples
    ///
    /// ```rust
    /// use diffusion_rs::output::visualization::PlotConfig;
    ///
    /// let config = PlotConfig::profile("Initial and final profiles");
    /// let config = PlotConfig::profile(format!("Profile at t={}", 6.25));
    /// let config = PlotConfig::profile(None::<&str>);
    /// ```
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Position x".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Concentration Profile".to_string());
        config
    }

    /// Create config for the evolution of a profile over time
    pub fn evolution(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::profile(title);
        if config.title == "Concentration Profile" {
            config.title = "Profile Evolution".to_string();
        }
        config
    }

    /// Use another y-axis label (e.g. "Temperature" for heat conduction)
    pub fn with_ylabel(mut self, ylabel: impl Into<String>) -> Self {
        self.ylabel = ylabel.into();
        self
    }

    /// Create config for several profiles with custom colors
    ///
    /// ```rust
    /// use diffusion_rs::output::visualization::PlotConfig;
    /// use plotters::prelude::*;
    ///
    /// let config = PlotConfig::series_colors(vec![BLACK, RED]);
    /// ```
    pub fn series_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::profile(NO_TITLE);
        config.series_colors = Some(colors);
        config
    }

    /// Get color for series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(colors) = &self.series_colors
            && let Some(color) = colors.get(series_index)
        {
            return *color;
        }

        const PALETTE: [RGBColor; 8] = [
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        PALETTE[series_index % PALETTE.len()]
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
        assert_eq!(config.ylabel, "Concentration");
        assert!(config.show_grid);
    }

    #[test]
    fn test_profile_config_default_title() {
        let config = PlotConfig::profile(NO_TITLE);
        assert_eq!(config.xlabel, "Position x");
        assert_eq!(config.title, "Concentration Profile");
    }

    #[test]
    fn test_profile_config_with_title() {
        let config = PlotConfig::profile(format!("D = {}", 100));
        assert_eq!(config.title, "D = 100");
    }

    #[test]
    fn test_evolution_config() {
        assert_eq!(PlotConfig::evolution(NO_TITLE).title, "Profile Evolution");
        assert_eq!(PlotConfig::evolution("Heat").title, "Heat");
    }

    #[test]
    fn test_ylabel_override() {
        let config = PlotConfig::profile(NO_TITLE).with_ylabel("Temperature");
        assert_eq!(config.ylabel, "Temperature");
    }

    #[test]
    fn test_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), BLUE);
        assert_eq!(config.get_series_color(1), RED);
        assert_eq!(config.get_series_color(8), BLUE); // Wraparound
    }

    #[test]
    fn test_series_color_custom_then_palette() {
        let config = PlotConfig::series_colors(vec![BLACK]);
        assert_eq!(config.get_series_color(0), BLACK);
        assert_eq!(config.get_series_color(1), RED);
    }
}

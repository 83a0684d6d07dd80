//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Size of one grid cell in user units
    pub tile_size: f64,

    /// Space left between neighbouring tiles
    pub tile_gap: f64,

    /// Corner radius of each tile
    pub corner_radius: f64,

    /// Padding around the viewBox
    pub viewbox_padding: f64,

    /// Whether to include XML declaration and standalone attributes
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "st-" for "st-tile")
    pub class_prefix: Option<String>,

    /// Whether to print point values in the corner of each tile
    pub show_points: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            tile_size: 40.0,
            tile_gap: 2.0,
            corner_radius: 4.0,
            viewbox_padding: 10.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("st-".to_string()),
            show_points: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tile size
    pub fn with_tile_size(mut self, size: f64) -> Self {
        self.tile_size = size;
        self
    }

    /// Set the gap between tiles
    pub fn with_tile_gap(mut self, gap: f64) -> Self {
        self.tile_gap = gap;
        self
    }

    /// Set the tile corner radius
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the viewBox padding
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Show or hide point values
    pub fn with_points(mut self, show: bool) -> Self {
        self.show_points = show;
        self
    }
}

//! SVG generation from board layouts

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::layout::{GridBounds, Layout};
use crate::points::LetterPoints;
use crate::stylesheet::Stylesheet;
use crate::words::Tile;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add CSS custom properties from a stylesheet, plus the rules that use them
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let stylesheet = stylesheet.merged_with_defaults();
        let mut css = String::from(":root {\n");
        for (token, value) in &stylesheet.colors {
            css.push_str(&format!("      --{}: {};\n", token, value));
        }
        css.push_str("    }");
        self.styles.push(css);

        let p = self.prefix();
        self.styles.extend([
            format!(".{p}board {{ fill: var(--board); }}"),
            format!(".{p}tile {{ fill: var(--tile-fill); stroke: var(--tile-stroke); }}"),
            format!(".{p}tile.{p}blank {{ fill: var(--tile-blank); }}"),
            format!(
                ".{p}letter {{ fill: var(--letter); font-family: var(--font-family); font-weight: bold; }}"
            ),
            format!(".{p}points {{ fill: var(--points); font-family: var(--font-family); }}"),
        ]);
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the board background covering the occupied area
    pub fn add_board(&mut self, width: f64, height: f64) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}board" x="0" y="0" width="{}" height="{}"/>"#,
            self.indent_str(),
            prefix,
            width,
            height
        ));
    }

    /// Open a group translated to a cell's top-left corner
    pub fn start_tile(&mut self, x: f64, y: f64) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<g class="{}cell" transform="translate({}, {})">"#,
            self.indent_str(),
            prefix,
            x,
            y
        ));
        self.indent += 1;
    }

    /// Close a tile group
    pub fn end_tile(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Add the tile face
    pub fn add_tile_face(&mut self, blank: bool) {
        let prefix = self.prefix();
        let class_list = if blank {
            format!("{p}tile {p}blank", p = prefix)
        } else {
            format!("{}tile", prefix)
        };
        let inset = self.config.tile_gap / 2.0;
        let size = (self.config.tile_size - self.config.tile_gap).max(0.0);

        self.elements.push(format!(
            r#"{}<rect class="{}" x="{}" y="{}" width="{}" height="{}" rx="{}"/>"#,
            self.indent_str(),
            class_list,
            inset,
            inset,
            size,
            size,
            self.config.corner_radius
        ));
    }

    /// Add the letter centred on the tile
    pub fn add_letter(&mut self, letter: char) {
        let prefix = self.prefix();
        let center = self.config.tile_size / 2.0;
        let font_size = round2(self.config.tile_size * 0.55);

        self.elements.push(format!(
            r#"{}<text class="{}letter" x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-size="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            center,
            center,
            font_size,
            escape_xml(&letter.to_string())
        ));
    }

    /// Add the point value in the lower right corner
    pub fn add_points(&mut self, value: u32) {
        let prefix = self.prefix();
        let ts = self.config.tile_size;
        let corner = round2(ts - self.config.tile_gap / 2.0 - ts * 0.1);
        let font_size = round2(ts * 0.25);

        self.elements.push(format!(
            r#"{}<text class="{}points" x="{}" y="{}" text-anchor="end" font-size="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            corner,
            corner,
            font_size,
            value
        ));
    }

    /// Build the final SVG string for a board of the given pixel size
    pub fn build(self, width: f64, height: f64) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = 0.0 - padding;
        let vb_y = 0.0 - padding;
        let vb_w = width + 2.0 * padding;
        let vb_h = height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            vb_x, vb_y, vb_w, vb_h, vb_w, vb_h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a layout to an SVG string with the default stylesheet and points
pub fn render_svg(layout: &Layout, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(layout, config, &Stylesheet::default(), &LetterPoints::standard())
}

/// Render a layout to an SVG string with a custom stylesheet and points table
pub fn render_svg_with_stylesheet(
    layout: &Layout,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
    points: &LetterPoints,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_stylesheet(stylesheet);

    let bounds = layout.bounds().unwrap_or(GridBounds::new(0, 0, 0, 0));
    let width = bounds.width as f64 * config.tile_size;
    let height = bounds.height as f64 * config.tile_size;
    builder.add_board(width, height);

    for placed in &layout.tiles {
        let x = (placed.x - bounds.x) as f64 * config.tile_size;
        let y = (placed.y - bounds.y) as f64 * config.tile_size;
        builder.start_tile(x, y);
        render_tile(placed.tile, points, config.show_points, &mut builder);
        builder.end_tile();
    }

    builder.build(width, height)
}

/// Render one tile's face and text
fn render_tile(tile: Tile, points: &LetterPoints, show_points: bool, builder: &mut SvgBuilder) {
    match tile {
        Tile::Blank => builder.add_tile_face(true),
        Tile::Letter(c) => {
            builder.add_tile_face(false);
            builder.add_letter(c);
            if show_points {
                if let Some(value) = points.points(tile) {
                    builder.add_points(value);
                }
            }
        }
    }
}

/// Encode an SVG document as a `data:` URI suitable for a download link
pub fn to_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

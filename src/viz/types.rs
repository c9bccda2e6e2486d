//! Public configuration types and layout constants for the chart renderers.
//!
//! `RenderConfig` is the loose, all-optional option bag callers deserialize from
//! JSON. Each renderer resolves it into its own typed config with documented
//! defaults (`PieConfig`, `BarConfig`, `PyramidConfig`).
//!
//! Canvas sizes are not validated. A width or height `<= 0` yields a degenerate but
//! well-formed SVG; passing sane sizes is the caller's job.

use serde::{Deserialize, Serialize};

use super::util::Palette;

/// Legend rows in bar charts hold this many items.
pub const LEGEND_ITEMS_PER_ROW: usize = 3;
/// Stacked segments shorter than this (px) get no value label.
pub const MIN_SEGMENT_LABEL_PX: f64 = 12.0;
/// Pyramid half-bars shorter than this (px) get no value label.
pub const MIN_PYRAMID_LABEL_PX: f64 = 20.0;
/// Maximum pyramid row thickness (px).
pub const MAX_PYRAMID_BAR_PX: f64 = 25.0;
/// Pie wedges narrower than this (degrees) get no value label.
pub const PIE_LABEL_MIN_SWEEP_DEG: f64 = 15.0;
/// Number of intervals on the bar chart Y axis.
pub const Y_TICKS: usize = 5;
/// Number of intervals on each side of the pyramid X axis.
pub const PYRAMID_TICKS: usize = 4;
/// Share of a bar slot covered by the bar itself; the rest is gap.
pub const BAR_FILL_RATIO: f64 = 0.8;

/// Default placeholder text for empty or all-zero datasets.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Font family hint written into every SVG `<style>` block.
pub const FONT_FAMILY: &str = "'Noto Sans Devanagari', 'Mukta', Arial, sans-serif";

/// Raw render options. Every field is optional; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub colors: Option<Vec<String>>,
    pub show_legend: Option<bool>,
    pub show_values: Option<bool>,
    pub nepali_numbers: Option<bool>,
    pub legend_height: Option<f64>,
    pub max_bar_width: Option<f64>,
    pub max_bar_height: Option<f64>,
    pub title: Option<String>,
    pub empty_message: Option<String>,
    pub digit_grouping: Option<bool>,
    pub legend_items_per_row: Option<usize>,
    pub male_label: Option<String>,
    pub female_label: Option<String>,
}

/// Settings shared by every chart kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub palette: Palette,
    pub nepali_numbers: bool,
    pub digit_grouping: bool,
    pub title: Option<String>,
    pub empty_message: String,
}

impl Canvas {
    fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            palette: Palette::default(),
            nepali_numbers: false,
            digit_grouping: false,
            title: None,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }

    /// Vertical space taken by the title line, if any.
    pub fn title_band(&self) -> f64 {
        if self.title.as_deref().is_some_and(|t| !t.trim().is_empty()) {
            24.0
        } else {
            0.0
        }
    }
}

/// Inner padding between the canvas edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieConfig {
    pub canvas: Canvas,
    pub show_legend: bool,
    pub show_values: bool,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(500.0, 300.0),
            show_legend: true,
            show_values: false,
        }
    }
}

/// Bar chart flavour; decides defaults and in-bar labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarKind {
    /// Full-page chart, totals above bars when values are shown.
    Grouped,
    /// Compact inline chart with labels inside each segment.
    Stacked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    pub kind: BarKind,
    pub canvas: Canvas,
    pub margins: Margins,
    pub show_legend: bool,
    pub show_values: bool,
    pub legend_height: f64,
    pub legend_items_per_row: usize,
    pub max_bar_width: f64,
    pub min_segment_label_px: f64,
    pub axis_font_px: f64,
    pub legend_font_px: f64,
    pub value_font_px: f64,
}

impl BarConfig {
    pub fn grouped() -> Self {
        Self {
            kind: BarKind::Grouped,
            canvas: Canvas::new(600.0, 400.0),
            margins: Margins {
                top: 20.0,
                right: 20.0,
                bottom: 40.0,
                left: 60.0,
            },
            show_legend: true,
            show_values: false,
            legend_height: 60.0,
            legend_items_per_row: LEGEND_ITEMS_PER_ROW,
            max_bar_width: 60.0,
            min_segment_label_px: MIN_SEGMENT_LABEL_PX,
            axis_font_px: 11.0,
            legend_font_px: 12.0,
            value_font_px: 10.0,
        }
    }

    pub fn stacked() -> Self {
        Self {
            kind: BarKind::Stacked,
            canvas: Canvas::new(400.0, 300.0),
            margins: Margins {
                top: 15.0,
                right: 15.0,
                bottom: 30.0,
                left: 45.0,
            },
            show_legend: true,
            show_values: true,
            legend_height: 50.0,
            legend_items_per_row: LEGEND_ITEMS_PER_ROW,
            max_bar_width: 40.0,
            min_segment_label_px: MIN_SEGMENT_LABEL_PX,
            axis_font_px: 10.0,
            legend_font_px: 10.0,
            value_font_px: 9.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PyramidConfig {
    pub canvas: Canvas,
    pub margins: Margins,
    pub show_legend: bool,
    pub show_values: bool,
    pub legend_height: f64,
    pub max_bar_height: f64,
    pub min_label_px: f64,
    /// Gap around the center axis that carries the bucket labels.
    pub center_gap: f64,
    pub male_label: String,
    pub female_label: String,
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(600.0, 400.0),
            margins: Margins {
                top: 20.0,
                right: 20.0,
                bottom: 30.0,
                left: 20.0,
            },
            show_legend: true,
            show_values: true,
            legend_height: 30.0,
            max_bar_height: MAX_PYRAMID_BAR_PX,
            min_label_px: MIN_PYRAMID_LABEL_PX,
            center_gap: 60.0,
            male_label: "Male".to_string(),
            female_label: "Female".to_string(),
        }
    }
}

impl RenderConfig {
    fn apply_canvas(&self, canvas: &mut Canvas) {
        if let Some(w) = self.width {
            canvas.width = w;
        }
        if let Some(h) = self.height {
            canvas.height = h;
        }
        if let Some(colors) = self.colors.as_ref().filter(|c| !c.is_empty()) {
            canvas.palette = Palette::new(colors.clone());
        }
        if let Some(n) = self.nepali_numbers {
            canvas.nepali_numbers = n;
        }
        if let Some(g) = self.digit_grouping {
            canvas.digit_grouping = g;
        }
        if let Some(t) = &self.title {
            canvas.title = Some(t.clone());
        }
        if let Some(m) = &self.empty_message {
            canvas.empty_message = m.clone();
        }
    }

    pub fn pie(&self) -> PieConfig {
        let mut cfg = PieConfig::default();
        self.apply_canvas(&mut cfg.canvas);
        cfg.show_legend = self.show_legend.unwrap_or(cfg.show_legend);
        cfg.show_values = self.show_values.unwrap_or(cfg.show_values);
        cfg
    }

    pub fn grouped_bar(&self) -> BarConfig {
        self.bar(BarConfig::grouped())
    }

    pub fn stacked_bar(&self) -> BarConfig {
        self.bar(BarConfig::stacked())
    }

    fn bar(&self, mut cfg: BarConfig) -> BarConfig {
        self.apply_canvas(&mut cfg.canvas);
        cfg.show_legend = self.show_legend.unwrap_or(cfg.show_legend);
        cfg.show_values = self.show_values.unwrap_or(cfg.show_values);
        cfg.legend_height = self.legend_height.unwrap_or(cfg.legend_height);
        cfg.max_bar_width = self.max_bar_width.unwrap_or(cfg.max_bar_width);
        if let Some(n) = self.legend_items_per_row.filter(|n| *n > 0) {
            cfg.legend_items_per_row = n;
        }
        cfg
    }

    pub fn pyramid(&self) -> PyramidConfig {
        let mut cfg = PyramidConfig::default();
        self.apply_canvas(&mut cfg.canvas);
        cfg.show_legend = self.show_legend.unwrap_or(cfg.show_legend);
        cfg.show_values = self.show_values.unwrap_or(cfg.show_values);
        cfg.legend_height = self.legend_height.unwrap_or(cfg.legend_height);
        cfg.max_bar_height = self.max_bar_height.unwrap_or(cfg.max_bar_height);
        if let Some(l) = &self.male_label {
            cfg.male_label = l.clone();
        }
        if let Some(l) = &self.female_label {
            cfg.female_label = l.clone();
        }
        cfg
    }
}

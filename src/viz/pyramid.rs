//! Population pyramid: back-to-back horizontal bars split by a center axis.
//!
//! Male bars grow left, female bars grow right. Both sides of every bucket scale
//! against one global maximum so bucket-to-bucket comparisons hold.

use crate::models::{PyramidData, sanitize};
use crate::numerals::{NumeralFormatter, localize_digits};
use crate::stats::pyramid_max;

use super::legend::{LegendEntry, centered_legend, draw_legend};
use super::svg::{Anchor, SvgDocument, placeholder};
use super::types::{PYRAMID_TICKS, PyramidConfig};

const AXIS_COLOR: &str = "#999999";
const ROW_GAP_PX: f64 = 2.0;
const LEGEND_FONT_PX: f64 = 12.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PyramidRow {
    pub key: String,
    pub label: String,
    pub male: f64,
    pub female: f64,
    /// Top edge and thickness of both half-bars.
    pub y: f64,
    pub thickness: f64,
    /// Pixel length of the male (left) and female (right) half-bars.
    pub male_px: f64,
    pub female_px: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PyramidLayout {
    pub center_x: f64,
    /// Width available to each side, excluding the center gutter.
    pub half_width: f64,
    pub plot_y: f64,
    pub plot_h: f64,
    pub max_value: f64,
    pub row_height: f64,
    pub rows: Vec<PyramidRow>,
}

impl PyramidLayout {
    /// Inner edge of the male bars.
    pub fn male_origin(&self, gap: f64) -> f64 {
        self.center_x - gap / 2.0
    }

    /// Inner edge of the female bars.
    pub fn female_origin(&self, gap: f64) -> f64 {
        self.center_x + gap / 2.0
    }
}

/// Compute pyramid geometry, or `None` when empty or every count is zero.
pub fn pyramid_layout(data: &PyramidData, cfg: &PyramidConfig) -> Option<PyramidLayout> {
    let max_value = pyramid_max(data);
    if data.is_empty() || max_value <= 0.0 {
        return None;
    }
    let c = &cfg.canvas;
    let m = &cfg.margins;
    let legend_band = if cfg.show_legend { cfg.legend_height } else { 0.0 };
    let plot_x = m.left;
    let plot_w = (c.width - m.left - m.right).max(0.0);
    let plot_y = m.top + c.title_band();
    let plot_h = (c.height - plot_y - m.bottom - legend_band).max(0.0);
    let center_x = plot_x + plot_w / 2.0;
    let half_width = ((plot_w - cfg.center_gap) / 2.0).max(0.0);

    let n = data.len() as f64;
    let row_height = (plot_h / n).min(cfg.max_bar_height);
    let thickness = (row_height - ROW_GAP_PX).max(1.0).min(row_height);
    let block_top = plot_y + (plot_h - row_height * n) / 2.0;

    let rows = data
        .iter()
        .enumerate()
        .map(|(i, (key, b))| {
            let male = sanitize(b.male);
            let female = sanitize(b.female);
            PyramidRow {
                key: key.clone(),
                label: b.label.clone(),
                male,
                female,
                y: block_top + i as f64 * row_height + (row_height - thickness) / 2.0,
                thickness,
                male_px: male / max_value * half_width,
                female_px: female / max_value * half_width,
            }
        })
        .collect();

    Some(PyramidLayout {
        center_x,
        half_width,
        plot_y,
        plot_h,
        max_value,
        row_height,
        rows,
    })
}

pub fn render_pyramid(data: &PyramidData, cfg: &PyramidConfig) -> String {
    let Some(layout) = pyramid_layout(data, cfg) else {
        log::debug!("pyramid: {} buckets, zero maximum; rendering placeholder", data.len());
        return placeholder(&cfg.canvas);
    };
    let canvas = &cfg.canvas;
    let localized = canvas.nepali_numbers;
    let fmt = NumeralFormatter::devanagari().with_grouping(canvas.digit_grouping);
    let male_color = canvas.palette.color(0);
    let female_color = canvas.palette.color(1);
    let male_origin = layout.male_origin(cfg.center_gap);
    let female_origin = layout.female_origin(cfg.center_gap);
    let axis_y = layout.plot_y + layout.plot_h;

    let mut doc = SvgDocument::new(canvas);
    doc.title(canvas);

    // mirrored X axis: tick i on each side stands for the same magnitude
    doc.line(
        male_origin - layout.half_width,
        axis_y,
        female_origin + layout.half_width,
        axis_y,
        AXIS_COLOR,
        1.0,
    );
    for i in 0..=PYRAMID_TICKS {
        let t = i as f64 / PYRAMID_TICKS as f64;
        let label = fmt.format(Some((layout.max_value * t).round()), localized);
        for x in [
            male_origin - layout.half_width * t,
            female_origin + layout.half_width * t,
        ] {
            doc.line(x, axis_y, x, axis_y + 4.0, AXIS_COLOR, 1.0);
            doc.text(x, axis_y + 14.0, Anchor::Middle, "axis", None, &label);
        }
    }
    doc.line(layout.center_x, layout.plot_y, layout.center_x, axis_y, AXIS_COLOR, 1.0);

    for row in &layout.rows {
        let mid_y = row.y + row.thickness / 2.0;
        doc.rect(male_origin - row.male_px, row.y, row.male_px, row.thickness, male_color);
        doc.rect(female_origin, row.y, row.female_px, row.thickness, female_color);
        doc.text(
            layout.center_x,
            mid_y,
            Anchor::Middle,
            "axis",
            None,
            &localize_digits(&row.label, localized),
        );
        if cfg.show_values {
            if row.male_px > cfg.min_label_px {
                doc.text(
                    male_origin - row.male_px / 2.0,
                    mid_y,
                    Anchor::Middle,
                    "value",
                    None,
                    &fmt.format(Some(row.male), localized),
                );
            }
            if row.female_px > cfg.min_label_px {
                doc.text(
                    female_origin + row.female_px / 2.0,
                    mid_y,
                    Anchor::Middle,
                    "value",
                    None,
                    &fmt.format(Some(row.female), localized),
                );
            }
        }
    }

    if cfg.show_legend {
        let entries = [
            LegendEntry {
                label: cfg.male_label.clone(),
                color: male_color.to_string(),
            },
            LegendEntry {
                label: cfg.female_label.clone(),
                color: female_color.to_string(),
            },
        ];
        let y = canvas.height - cfg.legend_height / 2.0;
        let items = centered_legend(&entries, canvas.width, y, LEGEND_FONT_PX);
        draw_legend(&mut doc, &items, LEGEND_FONT_PX);
    }

    doc.finish()
}

//! Legend layout and drawing.
//!
//! Three placements are used by the renderers:
//! - `side_legend`: single column to the right of a pie, block vertically centered
//! - `wrapped_legend`: fixed-size rows in a reserved bottom band, each row spread
//!   evenly over the plot width
//! - `centered_legend`: one row centered on the canvas (pyramid male/female key)

use super::svg::{Anchor, SvgDocument};
use super::text::{estimate_text_width_px, truncate_to_width};

const SWATCH_PX: f64 = 12.0;
const SWATCH_TO_TEXT_GAP: f64 = 6.0;
const ROW_H: f64 = 22.0;
const BAND_PAD: f64 = 8.0;
const CENTERED_ITEM_GAP: f64 = 24.0;

/// Input: what one legend row says and which colour it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Output: a legend entry with its final position.
/// `x` is the swatch's left edge, `y` the row's vertical center.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLegendItem {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: String,
}

fn block_width(label: &str, font_px: f64) -> f64 {
    SWATCH_PX + SWATCH_TO_TEXT_GAP + estimate_text_width_px(label, font_px)
}

/// Single column starting at `x`, vertically centered on `center_y`.
/// Labels are truncated to `max_w`.
pub fn side_legend(
    entries: &[LegendEntry],
    x: f64,
    max_w: f64,
    center_y: f64,
    font_px: f64,
) -> Vec<PlacedLegendItem> {
    let text_cap = (max_w - SWATCH_PX - SWATCH_TO_TEXT_GAP).max(0.0);
    let block_h = entries.len() as f64 * ROW_H;
    let top = center_y - block_h / 2.0;
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| PlacedLegendItem {
            x,
            y: top + i as f64 * ROW_H + ROW_H / 2.0,
            label: truncate_to_width(&e.label, font_px, text_cap),
            color: e.color.clone(),
        })
        .collect()
}

/// Rows of `per_row` items inside the band starting at `band_top`. Every row
/// divides the full plot width into equal slots, one per item, and centers the
/// item in its slot.
pub fn wrapped_legend(
    entries: &[LegendEntry],
    plot_x: f64,
    plot_w: f64,
    band_top: f64,
    per_row: usize,
    font_px: f64,
) -> Vec<PlacedLegendItem> {
    let per_row = per_row.max(1);
    let mut out = Vec::with_capacity(entries.len());
    for (r, row) in entries.chunks(per_row).enumerate() {
        let slot = plot_w / row.len() as f64;
        let text_cap = (slot - SWATCH_PX - SWATCH_TO_TEXT_GAP - 4.0).max(0.0);
        let y = band_top + BAND_PAD + r as f64 * ROW_H + ROW_H / 2.0;
        for (col, e) in row.iter().enumerate() {
            let label = truncate_to_width(&e.label, font_px, text_cap);
            let w = block_width(&label, font_px);
            out.push(PlacedLegendItem {
                x: plot_x + col as f64 * slot + ((slot - w) / 2.0).max(0.0),
                y,
                label,
                color: e.color.clone(),
            });
        }
    }
    out
}

/// One row centered horizontally on `canvas_w` at height `y`.
pub fn centered_legend(
    entries: &[LegendEntry],
    canvas_w: f64,
    y: f64,
    font_px: f64,
) -> Vec<PlacedLegendItem> {
    let widths: Vec<f64> = entries.iter().map(|e| block_width(&e.label, font_px)).collect();
    let total = widths.iter().sum::<f64>()
        + CENTERED_ITEM_GAP * entries.len().saturating_sub(1) as f64;
    let mut x = (canvas_w - total) / 2.0;
    entries
        .iter()
        .zip(widths)
        .map(|(e, w)| {
            let item = PlacedLegendItem {
                x,
                y,
                label: e.label.clone(),
                color: e.color.clone(),
            };
            x += w + CENTERED_ITEM_GAP;
            item
        })
        .collect()
}

pub fn draw_legend(doc: &mut SvgDocument, items: &[PlacedLegendItem], font_px: f64) {
    for it in items {
        doc.rect(it.x, it.y - SWATCH_PX / 2.0, SWATCH_PX, SWATCH_PX, &it.color);
        doc.text(
            it.x + SWATCH_PX + SWATCH_TO_TEXT_GAP,
            it.y,
            Anchor::Start,
            "legend",
            Some(font_px),
            &it.label,
        );
    }
}

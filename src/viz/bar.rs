//! Grouped and stacked bar charts.
//!
//! Both flavours stack each group's categories bottom to top and share one
//! vertical scale driven by the **largest group total**, so a group's full bar is
//! comparable to every other group's bar regardless of its category mix. They
//! differ in defaults and labelling (see `BarKind`).

use crate::models::{GroupedSeries, sanitize};
use crate::numerals::{NumeralFormatter, localize_digits};
use crate::stats::{group_totals, ordered_categories, ordered_groups};

use super::legend::{LegendEntry, draw_legend, wrapped_legend};
use super::svg::{Anchor, SvgDocument, placeholder};
use super::types::{BAR_FILL_RATIO, BarConfig, BarKind, Y_TICKS};

const AXIS_COLOR: &str = "#999999";
const GRID_COLOR: &str = "#e5e5e5";

/// One stacked piece of a bar, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub category: String,
    pub value: f64,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub key: String,
    pub total: f64,
    /// Horizontal center of the group's slot.
    pub center_x: f64,
    /// Top of the stacked bar (equals the baseline for an empty group).
    pub top_y: f64,
    pub segments: Vec<Segment>,
}

impl BarGroup {
    pub fn height(&self) -> f64 {
        self.segments.iter().map(|s| s.height).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub plot_x: f64,
    pub plot_y: f64,
    pub plot_w: f64,
    pub plot_h: f64,
    /// Largest group total; the top of the Y axis.
    pub max_total: f64,
    /// Slot width per group: `min(plot_w / groups, max_bar_width)`.
    pub slot_width: f64,
    pub bar_width: f64,
    /// Category keys and colours in stacking/legend order.
    pub categories: Vec<(String, String)>,
    pub groups: Vec<BarGroup>,
}

impl BarLayout {
    pub fn baseline(&self) -> f64 {
        self.plot_y + self.plot_h
    }
}

/// Compute bar geometry, or `None` when there is nothing to draw
/// (no groups, or every group totals zero).
pub fn bar_layout(data: &GroupedSeries, cfg: &BarConfig) -> Option<BarLayout> {
    let groups = ordered_groups(data);
    if groups.is_empty() {
        return None;
    }
    let totals = group_totals(data, &groups);
    let max_total = totals.iter().copied().fold(0.0, f64::max);
    if max_total <= 0.0 {
        return None;
    }

    let c = &cfg.canvas;
    let m = &cfg.margins;
    let legend_band = if cfg.show_legend { cfg.legend_height } else { 0.0 };
    let plot_x = m.left;
    let plot_y = m.top + c.title_band();
    let plot_w = (c.width - m.left - m.right).max(0.0);
    let plot_h = (c.height - plot_y - m.bottom - legend_band).max(0.0);
    let baseline = plot_y + plot_h;

    let categories: Vec<(String, String)> = ordered_categories(data, &groups)
        .into_iter()
        .enumerate()
        .map(|(i, k)| (k.to_string(), c.palette.color(i).to_string()))
        .collect();

    let n = groups.len() as f64;
    let slot_width = (plot_w / n).min(cfg.max_bar_width);
    let bar_width = slot_width * BAR_FILL_RATIO;
    let block_x = plot_x + (plot_w - slot_width * n) / 2.0;

    let mut out = Vec::with_capacity(groups.len());
    for (gi, (g, total)) in groups.iter().zip(&totals).enumerate() {
        let slot_x = block_x + gi as f64 * slot_width;
        let bar_x = slot_x + (slot_width - bar_width) / 2.0;
        let cats = &data[*g];
        let mut stacked = 0.0;
        let mut segments = Vec::new();
        for (cat, color) in &categories {
            let value = cats.get(cat).copied().map(sanitize).unwrap_or(0.0);
            if value <= 0.0 {
                continue;
            }
            let height = value / max_total * plot_h;
            segments.push(Segment {
                category: cat.clone(),
                value,
                color: color.clone(),
                x: bar_x,
                y: baseline - stacked - height,
                width: bar_width,
                height,
            });
            stacked += height;
        }
        out.push(BarGroup {
            key: g.to_string(),
            total: *total,
            center_x: slot_x + slot_width / 2.0,
            top_y: baseline - stacked,
            segments,
        });
    }

    Some(BarLayout {
        plot_x,
        plot_y,
        plot_w,
        plot_h,
        max_total,
        slot_width,
        bar_width,
        categories,
        groups: out,
    })
}

pub fn render_grouped_bar(data: &GroupedSeries, cfg: &BarConfig) -> String {
    render_bars(data, cfg, BarKind::Grouped)
}

pub fn render_stacked_bar(data: &GroupedSeries, cfg: &BarConfig) -> String {
    render_bars(data, cfg, BarKind::Stacked)
}

fn render_bars(data: &GroupedSeries, cfg: &BarConfig, kind: BarKind) -> String {
    let Some(layout) = bar_layout(data, cfg) else {
        log::debug!("{kind:?} bar: {} groups, zero totals; rendering placeholder", data.len());
        return placeholder(&cfg.canvas);
    };
    let canvas = &cfg.canvas;
    let localized = canvas.nepali_numbers;
    let fmt = NumeralFormatter::devanagari().with_grouping(canvas.digit_grouping);
    let baseline = layout.baseline();
    let axis_px = Some(cfg.axis_font_px);

    let mut doc = SvgDocument::new(canvas);
    doc.title(canvas);

    // grid + Y ticks
    for i in 0..=Y_TICKS {
        let t = i as f64 / Y_TICKS as f64;
        let y = baseline - layout.plot_h * t;
        if i > 0 {
            doc.line(layout.plot_x, y, layout.plot_x + layout.plot_w, y, GRID_COLOR, 1.0);
        }
        doc.line(layout.plot_x - 4.0, y, layout.plot_x, y, AXIS_COLOR, 1.0);
        doc.text(
            layout.plot_x - 6.0,
            y,
            Anchor::End,
            "axis",
            axis_px,
            &fmt.format(Some((layout.max_total * t).round()), localized),
        );
    }
    doc.line(layout.plot_x, layout.plot_y, layout.plot_x, baseline, AXIS_COLOR, 1.0);
    doc.line(
        layout.plot_x,
        baseline,
        layout.plot_x + layout.plot_w,
        baseline,
        AXIS_COLOR,
        1.0,
    );

    for group in &layout.groups {
        for s in &group.segments {
            doc.rect(s.x, s.y, s.width, s.height, &s.color);
        }
        if cfg.show_values {
            match kind {
                BarKind::Stacked => {
                    for s in group
                        .segments
                        .iter()
                        .filter(|s| s.height > cfg.min_segment_label_px)
                    {
                        doc.text(
                            s.x + s.width / 2.0,
                            s.y + s.height / 2.0,
                            Anchor::Middle,
                            "value",
                            Some(cfg.value_font_px),
                            &fmt.format(Some(s.value), localized),
                        );
                    }
                }
                BarKind::Grouped => {
                    doc.text(
                        group.center_x,
                        group.top_y - 8.0,
                        Anchor::Middle,
                        "value-dark",
                        Some(cfg.value_font_px),
                        &fmt.format(Some(group.total), localized),
                    );
                }
            }
        }
        doc.text(
            group.center_x,
            baseline + cfg.axis_font_px + 4.0,
            Anchor::Middle,
            "axis",
            axis_px,
            &localize_digits(&group.key, localized),
        );
    }

    if cfg.show_legend {
        let entries: Vec<LegendEntry> = layout
            .categories
            .iter()
            .map(|(k, color)| LegendEntry {
                label: k.clone(),
                color: color.clone(),
            })
            .collect();
        let items = wrapped_legend(
            &entries,
            layout.plot_x,
            layout.plot_w,
            canvas.height - cfg.legend_height,
            cfg.legend_items_per_row,
            cfg.legend_font_px,
        );
        draw_legend(&mut doc, &items, cfg.legend_font_px);
    }

    doc.finish()
}

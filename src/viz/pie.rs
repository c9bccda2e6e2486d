//! Pie chart: proportional wedges plus a legend to the right of the circle.

use std::f64::consts::PI;

use crate::models::{ChartData, sanitize};
use crate::numerals::NumeralFormatter;
use crate::stats::pie_total;

use super::legend::{LegendEntry, draw_legend, side_legend};
use super::svg::{Anchor, SvgDocument, placeholder};
use super::types::{PIE_LABEL_MIN_SWEEP_DEG, PieConfig};
use super::util::{fmt_num_prec, resolve_color};

/// Angle of the first wedge's leading edge: straight up.
pub const START_ANGLE_DEG: f64 = -90.0;

const CIRCLE_PAD: f64 = 20.0;
const LEGEND_FONT_PX: f64 = 12.0;
/// Share of the canvas width reserved for the legend column.
const LEGEND_SHARE: f64 = 0.4;

/// One wedge of the pie. Angles are degrees, 0° pointing right, clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub color: String,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Wedge {
    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// More than half the circle; such wedges are drawn as two arcs.
    pub fn large_arc(&self) -> bool {
        self.sweep_deg() > 180.0
    }
}

/// Circle and wedges for `data`. Zero-valued categories produce no wedge but keep
/// their palette index. Returns no wedges when the total is zero.
pub fn pie_layout(data: &ChartData, cfg: &PieConfig) -> Vec<Wedge> {
    let total = pie_total(data);
    if total <= 0.0 {
        return Vec::new();
    }
    let last_nonzero = data.values().rposition(|c| sanitize(c.value) > 0.0);

    let mut angle = START_ANGLE_DEG;
    let mut wedges = Vec::new();
    for (idx, (key, cat)) in data.iter().enumerate() {
        let value = sanitize(cat.value);
        if value <= 0.0 {
            continue;
        }
        let start = angle;
        // the last wedge closes the circle exactly
        let end = if Some(idx) == last_nonzero {
            START_ANGLE_DEG + 360.0
        } else {
            start + 360.0 * value / total
        };
        angle = end;
        wedges.push(Wedge {
            key: key.clone(),
            label: cat.label.clone(),
            value,
            color: resolve_color(cat.color.as_deref(), &cfg.canvas.palette, idx).to_string(),
            start_deg: start,
            end_deg: end,
        });
    }
    wedges
}

/// Center and radius of the circle for the configured canvas.
pub fn circle_geometry(cfg: &PieConfig) -> (f64, f64, f64) {
    let c = &cfg.canvas;
    let top = c.title_band();
    let area_w = if cfg.show_legend {
        c.width * (1.0 - LEGEND_SHARE)
    } else {
        c.width
    };
    let area_h = c.height - top;
    let r = (area_w.min(area_h) / 2.0 - CIRCLE_PAD).max(0.0);
    (area_w / 2.0, top + area_h / 2.0, r)
}

fn point(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = deg * PI / 180.0;
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Decimals used for arc endpoints; enough to keep the ends of a sliver wedge
/// on a large circle apart.
const PATH_DECIMALS: usize = 4;

fn coord(v: f64) -> String {
    fmt_num_prec(v, PATH_DECIMALS)
}

/// SVG path data for one wedge. A wedge sweeping more than 180° is drawn as two
/// arcs meeting at its mid-angle, so no arc has coinciding endpoints (a single
/// arc with identical endpoints renders nothing). This also covers the full
/// circle of a single category.
pub fn wedge_path(w: &Wedge, cx: f64, cy: f64, r: f64) -> String {
    let rs = coord(r);
    let (x1, y1) = point(cx, cy, r, w.start_deg);
    let (x2, y2) = point(cx, cy, r, w.end_deg);
    let open = if w.sweep_deg() >= 360.0 {
        format!("M {} {}", coord(x1), coord(y1))
    } else {
        format!("M {} {} L {} {}", coord(cx), coord(cy), coord(x1), coord(y1))
    };
    if w.large_arc() {
        let (mx, my) = point(cx, cy, r, (w.start_deg + w.end_deg) / 2.0);
        format!(
            "{open} A {rs} {rs} 0 0 1 {} {} A {rs} {rs} 0 0 1 {} {} Z",
            coord(mx),
            coord(my),
            coord(x2),
            coord(y2)
        )
    } else {
        format!("{open} A {rs} {rs} 0 0 1 {} {} Z", coord(x2), coord(y2))
    }
}

pub fn render_pie(data: &ChartData, cfg: &PieConfig) -> String {
    let wedges = pie_layout(data, cfg);
    if wedges.is_empty() {
        log::debug!("pie: {} categories, zero total; rendering placeholder", data.len());
        return placeholder(&cfg.canvas);
    }
    let canvas = &cfg.canvas;
    let fmt = NumeralFormatter::devanagari().with_grouping(canvas.digit_grouping);
    let localized = canvas.nepali_numbers;
    let (cx, cy, r) = circle_geometry(cfg);

    let mut doc = SvgDocument::new(canvas);
    doc.title(canvas);
    for w in &wedges {
        doc.path(&wedge_path(w, cx, cy, r), &w.color, "#ffffff");
    }

    if cfg.show_values {
        for w in wedges.iter().filter(|w| w.sweep_deg() >= PIE_LABEL_MIN_SWEEP_DEG) {
            let (lx, ly) = point(cx, cy, r * 0.65, (w.start_deg + w.end_deg) / 2.0);
            doc.text(
                lx,
                ly,
                Anchor::Middle,
                "value",
                None,
                &fmt.format(Some(w.value), localized),
            );
        }
    }

    if cfg.show_legend {
        let legend_x = canvas.width * (1.0 - LEGEND_SHARE) + 10.0;
        let legend_w = canvas.width * LEGEND_SHARE - 20.0;
        let entries: Vec<LegendEntry> = wedges
            .iter()
            .map(|w| LegendEntry {
                label: format!("{} ({})", w.label, fmt.format(Some(w.value), localized)),
                color: w.color.clone(),
            })
            .collect();
        // centered on the circle, below any title band
        let items = side_legend(&entries, legend_x, legend_w, cy, LEGEND_FONT_PX);
        draw_legend(&mut doc, &items, LEGEND_FONT_PX);
    }

    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryValue;

    #[test]
    fn single_category_is_full_circle() {
        let mut d = ChartData::new();
        d.insert("a".into(), CategoryValue::new("A", 5.0));
        let w = pie_layout(&d, &PieConfig::default());
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].sweep_deg(), 360.0);
        let p = wedge_path(&w[0], 100.0, 100.0, 50.0);
        assert_eq!(p.matches(" A ").count(), 2);
    }

    #[test]
    fn wedges_over_half_split_into_two_arcs() {
        let mut d = ChartData::new();
        d.insert("a".into(), CategoryValue::new("A", 3.0));
        d.insert("b".into(), CategoryValue::new("B", 1.0));
        let w = pie_layout(&d, &PieConfig::default());
        assert!(w[0].large_arc());
        assert!(!w[1].large_arc());
        let big = wedge_path(&w[0], 0.0, 0.0, 10.0);
        let small = wedge_path(&w[1], 0.0, 0.0, 10.0);
        assert_eq!(big.matches(" A ").count(), 2);
        assert_eq!(small.matches(" A ").count(), 1);
        assert!(!big.contains(" 0 1 1 "));
    }

    #[test]
    fn zero_category_keeps_palette_index() {
        let mut d = ChartData::new();
        d.insert("a".into(), CategoryValue::new("A", 0.0));
        d.insert("b".into(), CategoryValue::new("B", 1.0));
        let cfg = PieConfig::default();
        let w = pie_layout(&d, &cfg);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].color, cfg.canvas.palette.color(1));
    }
}

//! Utility functions for visualization: palette, colour resolution, number output.

use regex::Regex;
use std::sync::OnceLock;

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
pub const OFFICE10: [&str; 10] = [
    "#4472C4", // blue
    "#ED7D31", // orange
    "#A5A5A5", // gray
    "#FFC000", // gold
    "#5B9BD5", // light blue
    "#70AD47", // green
    "#264478", // dark blue
    "#9E480E", // dark orange
    "#636363", // dark gray
    "#997300", // brownish
];

/// Ordered list of fill colours, indexed modulo its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<String>);

impl Default for Palette {
    fn default() -> Self {
        Self(OFFICE10.iter().map(|c| c.to_string()).collect())
    }
}

impl Palette {
    /// Build a palette from caller colours. Invalid entries are dropped; an
    /// empty result falls back to the default palette.
    pub fn new(colors: Vec<String>) -> Self {
        let valid: Vec<String> = colors
            .into_iter()
            .filter(|c| {
                let ok = is_valid_color(c);
                if !ok {
                    log::warn!("dropping invalid palette colour {c:?}");
                }
                ok
            })
            .collect();
        if valid.is_empty() {
            Self::default()
        } else {
            Self(valid)
        }
    }

    #[inline]
    pub fn color(&self, idx: usize) -> &str {
        &self.0[idx % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(#[0-9a-fA-F]{3,4}|#[0-9a-fA-F]{6}|#[0-9a-fA-F]{8}|[a-zA-Z]{3,20}|rgba?\(\s*[0-9.%,\s]+\)|hsla?\(\s*[0-9.%,\sdeg]+\))$",
        )
        .expect("static colour regex")
    })
}

/// Accepts hex, named, `rgb()/rgba()` and `hsl()/hsla()` colours. Anything else
/// could break out of an SVG attribute and is rejected.
pub fn is_valid_color(c: &str) -> bool {
    color_regex().is_match(c.trim())
}

/// Explicit colour if it is valid, otherwise the palette entry at `idx`.
pub fn resolve_color<'a>(explicit: Option<&'a str>, palette: &'a Palette, idx: usize) -> &'a str {
    match explicit.map(str::trim) {
        Some(c) if is_valid_color(c) => c,
        Some(c) => {
            log::warn!("ignoring invalid colour {c:?}, using palette index {idx}");
            palette.color(idx)
        }
        None => palette.color(idx),
    }
}

/// Coordinates are written with at most two decimals, trailing zeros trimmed.
pub fn fmt_num(v: f64) -> String {
    fmt_num_prec(v, 2)
}

/// `fmt_num` with a caller-chosen number of decimals.
pub fn fmt_num_prec(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.*}", decimals, v);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" { "0".to_string() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps() {
        let p = Palette::default();
        assert_eq!(p.color(0), p.color(10));
        assert_eq!(p.color(3), "#FFC000");
    }

    #[test]
    fn explicit_colour_wins_when_valid() {
        let p = Palette::default();
        assert_eq!(resolve_color(Some("#123456"), &p, 0), "#123456");
        assert_eq!(resolve_color(Some("teal"), &p, 0), "teal");
        assert_eq!(resolve_color(Some("rgb(1, 2, 3)"), &p, 0), "rgb(1, 2, 3)");
        assert_eq!(resolve_color(Some("red\" onload=\"x"), &p, 1), "#ED7D31");
        assert_eq!(resolve_color(None, &p, 2), "#A5A5A5");
    }

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(10.5), "10.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.33");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(f64::NAN), "0");
        assert_eq!(fmt_num_prec(149.99673, 4), "149.9967");
        assert_eq!(fmt_num_prec(-0.00001, 4), "0");
    }
}

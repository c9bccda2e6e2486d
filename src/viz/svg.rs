//! Minimal SVG document accumulator.
//!
//! Elements are appended in call order, so the output is stable for identical
//! inputs. Text content and attribute values are XML-escaped here; callers pass
//! plain strings.

use std::fmt::Write as _;

use super::types::{Canvas, FONT_FAMILY};
use super::util::fmt_num;

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

pub struct SvgDocument {
    out: String,
}

impl SvgDocument {
    /// Open a document with the inline stylesheet and a white background.
    pub fn new(canvas: &Canvas) -> Self {
        let w = fmt_num(canvas.width);
        let h = fmt_num(canvas.height);
        let mut out = String::with_capacity(4096);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        let _ = write!(
            out,
            "<style>text{{font-family:{FONT_FAMILY};fill:#333333;}}\
.title{{font-size:14px;font-weight:bold;}}\
.axis{{font-size:11px;fill:#555555;}}\
.legend{{font-size:12px;}}\
.value{{font-size:10px;fill:#ffffff;}}\
.value-dark{{font-size:10px;fill:#333333;}}\
.empty{{font-size:14px;fill:#888888;}}</style>"
        );
        let _ = write!(out, r##"<rect width="{w}" height="{h}" fill="#ffffff"/>"##);
        Self { out }
    }

    /// Draw the optional chart title centered in the top band.
    pub fn title(&mut self, canvas: &Canvas) {
        if let Some(title) = canvas.title.as_deref().filter(|t| !t.trim().is_empty()) {
            self.text(canvas.width / 2.0, 16.0, Anchor::Middle, "title", None, title);
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        let _ = write!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(w.max(0.0)),
            fmt_num(h.max(0.0)),
            escape_xml(fill)
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        let _ = write!(
            self.out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2),
            escape_xml(stroke),
            fmt_num(width)
        );
    }

    pub fn path(&mut self, d: &str, fill: &str, stroke: &str) {
        let _ = write!(
            self.out,
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            d,
            escape_xml(fill),
            escape_xml(stroke)
        );
    }

    /// `font_px` overrides the class font size when set.
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        anchor: Anchor,
        class: &str,
        font_px: Option<f64>,
        content: &str,
    ) {
        let size = font_px
            .map(|px| format!(r#" font-size="{}""#, fmt_num(px)))
            .unwrap_or_default();
        let _ = write!(
            self.out,
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="middle" class="{}"{}>{}</text>"#,
            fmt_num(x),
            fmt_num(y),
            anchor.as_str(),
            class,
            size,
            escape_xml(content)
        );
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }
}

/// The fixed fallback for empty or all-zero datasets: the configured canvas with
/// one centered message and nothing else.
pub fn placeholder(canvas: &Canvas) -> String {
    let mut doc = SvgDocument::new(canvas);
    doc.text(
        canvas.width / 2.0,
        canvas.height / 2.0,
        Anchor::Middle,
        "empty",
        None,
        &canvas.empty_message,
    );
    doc.finish()
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

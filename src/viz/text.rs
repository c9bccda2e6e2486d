//! Text measurement and truncation utilities.
//!
//! There is no font engine here, so widths are estimated from character counts.

/// Devanagari vowel signs and other combining marks share the advance of the
/// preceding consonant.
fn is_combining_mark(ch: char) -> bool {
    matches!(ch as u32,
        0x0900..=0x0903 | 0x093A..=0x093C | 0x093E..=0x094F | 0x0951..=0x0957 | 0x0962..=0x0963
        | 0x0300..=0x036F | 0x200C | 0x200D)
}

/// Heuristic: estimate pixel width of text.
pub fn estimate_text_width_px(text: &str, font_px: f64) -> f64 {
    let advances = text.chars().filter(|c| !is_combining_mark(*c)).count();
    (advances as f64 * font_px * 0.60).ceil()
}

/// Truncate to fit `max_px` and add a single ellipsis if needed.
pub fn truncate_to_width(text: &str, font_px: f64, max_px: f64) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        let candidate = format!("{out}{ch}…");
        if estimate_text_width_px(&candidate, font_px) > max_px {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

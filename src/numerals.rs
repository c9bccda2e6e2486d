//! Digit localization for chart labels.
//!
//! Every renderer formats axis ticks, legend counts and value labels through this
//! module so that switching `nepaliNumbers` on swaps ASCII digits for Devanagari
//! glyphs consistently across a chart.

use num_format::{Locale, ToFormattedString};

/// Devanagari digits, indexed by their ASCII value.
pub const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Formats numbers and optionally replaces ASCII digits with a fixed glyph table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumeralFormatter {
    digits: [char; 10],
    grouping: bool,
}

impl Default for NumeralFormatter {
    fn default() -> Self {
        Self::devanagari()
    }
}

impl NumeralFormatter {
    pub fn devanagari() -> Self {
        Self::with_digits(DEVANAGARI_DIGITS)
    }

    pub fn with_digits(digits: [char; 10]) -> Self {
        Self {
            digits,
            grouping: false,
        }
    }

    /// Insert thousands separators into whole numbers (`12,345`).
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// Format `n`, substituting localized digits when `localized` is set.
    ///
    /// `None`, NaN and infinities format as zero.
    pub fn format(&self, n: Option<f64>, localized: bool) -> String {
        let plain = self.plain(n);
        self.localize(&plain, localized)
    }

    /// Replace every ASCII digit in `text`; all other characters pass through.
    pub fn localize(&self, text: &str, localized: bool) -> String {
        if !localized {
            return text.to_string();
        }
        text.chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    self.digits[(c as u8 - b'0') as usize]
                } else {
                    c
                }
            })
            .collect()
    }

    fn plain(&self, n: Option<f64>) -> String {
        let v = match n {
            Some(v) if v.is_finite() => v,
            _ => return "0".to_string(),
        };
        if v == 0.0 {
            // also catches -0.0
            return "0".to_string();
        }
        if self.grouping && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
            return (v as i64).to_formatted_string(&Locale::en);
        }
        v.to_string()
    }
}

/// Format `n` with the default Devanagari table.
pub fn format_number(n: Option<f64>, localized: bool) -> String {
    NumeralFormatter::devanagari().format(n, localized)
}

/// Localize the digits of arbitrary text (e.g. a ward number used as a group key).
pub fn localize_digits(text: &str, localized: bool) -> String {
    NumeralFormatter::devanagari().localize(text, localized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_formatting_is_shortest_repr() {
        assert_eq!(format_number(Some(1234.0), false), "1234");
        assert_eq!(format_number(Some(12.5), false), "12.5");
        assert_eq!(format_number(Some(-0.0), false), "0");
    }

    #[test]
    fn invalid_inputs_are_zero() {
        assert_eq!(format_number(None, false), "0");
        assert_eq!(format_number(Some(f64::NAN), false), "0");
        assert_eq!(format_number(Some(f64::NAN), true), "०");
        assert_eq!(format_number(Some(f64::INFINITY), true), "०");
    }

    #[test]
    fn sign_and_separator_pass_through() {
        assert_eq!(format_number(Some(-12.5), true), "-१२.५");
    }

    #[test]
    fn grouping_only_applies_to_whole_numbers() {
        let f = NumeralFormatter::devanagari().with_grouping(true);
        assert_eq!(f.format(Some(1234567.0), false), "1,234,567");
        assert_eq!(f.format(Some(1234.5), false), "1234.5");
        assert_eq!(f.format(Some(1234.0), true), "१,२३४");
    }

    #[test]
    fn localize_leaves_letters_alone() {
        assert_eq!(localize_digits("Ward 12", true), "Ward १२");
        assert_eq!(localize_digits("Ward 12", false), "Ward 12");
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One slice/category of a categorical distribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryValue {
    /// Non-negative count. Missing, `null`, non-numeric or negative inputs are
    /// treated as `0` by every renderer.
    #[serde(default, deserialize_with = "de_f64_lenient")]
    pub value: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CategoryValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            value,
            label: label.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Category key -> value, in document order. Used by the pie renderer.
pub type ChartData = IndexMap<String, CategoryValue>;

/// Group key (e.g. ward number) -> category key -> value.
/// Used by the grouped and stacked bar renderers.
pub type GroupedSeries = IndexMap<String, IndexMap<String, f64>>;

/// One row of a population pyramid (e.g. an age band).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PyramidBucket {
    #[serde(default, deserialize_with = "de_f64_lenient")]
    pub male: f64,
    #[serde(default, deserialize_with = "de_f64_lenient")]
    pub female: f64,
    #[serde(
        default,
        deserialize_with = "de_opt_f64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub other: Option<f64>,
    pub label: String,
}

impl PyramidBucket {
    pub fn new(label: impl Into<String>, male: f64, female: f64) -> Self {
        Self {
            male,
            female,
            other: None,
            label: label.into(),
        }
    }
}

/// Bucket id -> bucket, top to bottom in document order.
pub type PyramidData = IndexMap<String, PyramidBucket>;

/// Clamp a raw input value to the renderable domain: NaN, infinities and
/// negatives become `0.0`.
#[inline]
pub fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Returns true when `v` had to be replaced by `sanitize` (NaN, infinite or negative).
#[inline]
pub fn is_invalid(v: f64) -> bool {
    !v.is_finite() || v < 0.0
}

/// Serde helper: parse `f64` from a JSON number, a numeric string, or `null`.
/// `null` and unparsable strings become NaN so that `sanitize` maps them to zero
/// while statistics can still count them as missing.
pub(crate) fn de_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct F64Visitor;

    impl<'de> Visitor<'de> for F64Visitor {
        type Value = f64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number, a numeric string, or null")
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(s.trim().parse::<f64>().unwrap_or(f64::NAN))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(f64::NAN)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(f64::NAN)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(F64Visitor)
        }
    }

    deserializer.deserialize_any(F64Visitor)
}

/// Optional counterpart of [`de_f64_lenient`]: absent or `null` is `None`, anything
/// else goes through the lenient parser.
pub(crate) fn de_opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Lenient(#[serde(deserialize_with = "de_f64_lenient")] f64);

    Ok(Option::<Lenient>::deserialize(deserializer)?.map(|Lenient(v)| v))
}

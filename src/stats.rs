use crate::models::{ChartData, GroupedSeries, PyramidData, is_invalid, sanitize};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Summary statistics for one series of a dataset (the whole pie, one bar group,
/// one side of a pyramid).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub key: String,
    pub count: usize,
    /// Entries that were NaN, infinite or negative and are drawn as zero.
    pub missing: usize,
    pub total: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

fn summarize<'a>(key: impl Into<String>, raw: impl IntoIterator<Item = &'a f64>) -> Summary {
    let mut count = 0;
    let mut missing = 0;
    let mut vals: Vec<f64> = Vec::new();
    for v in raw {
        count += 1;
        if is_invalid(*v) {
            missing += 1;
        } else {
            vals.push(*v);
        }
    }
    Summary {
        key: key.into(),
        count,
        missing,
        total: vals.iter().sum(),
        min: vals.iter().copied().reduce(f64::min),
        max: vals.iter().copied().reduce(f64::max),
    }
}

/// Sum of all sanitized category values.
pub fn pie_total(data: &ChartData) -> f64 {
    data.values().map(|c| sanitize(c.value)).sum()
}

/// Display order for bar groups: integer keys ascending by value, then all
/// other keys in input order.
pub fn ordered_groups(data: &GroupedSeries) -> Vec<&str> {
    let mut numeric: Vec<(i64, &str)> = Vec::new();
    let mut other: Vec<&str> = Vec::new();
    for key in data.keys() {
        match key.trim().parse::<i64>() {
            Ok(n) => numeric.push((n, key.as_str())),
            Err(_) => other.push(key.as_str()),
        }
    }
    // stable: equal numbers ("1" and "01") keep input order
    numeric.sort_by_key(|(n, _)| *n);
    numeric.into_iter().map(|(_, k)| k).chain(other).collect()
}

/// Union of categories across `groups`, in order of first appearance.
pub fn ordered_categories<'a>(data: &'a GroupedSeries, groups: &[&str]) -> Vec<&'a str> {
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut order: Vec<&str> = Vec::new();
    for g in groups {
        if let Some(cats) = data.get(*g) {
            for key in cats.keys() {
                if seen.insert(key.as_str()) {
                    order.push(key.as_str());
                }
            }
        }
    }
    order
}

/// Sanitized total for each group, aligned with `groups`.
pub fn group_totals(data: &GroupedSeries, groups: &[&str]) -> Vec<f64> {
    groups
        .iter()
        .map(|g| {
            data.get(*g)
                .map(|cats| cats.values().map(|v| sanitize(*v)).sum())
                .unwrap_or(0.0)
        })
        .collect()
}

/// Largest male or female count across all buckets.
pub fn pyramid_max(data: &PyramidData) -> f64 {
    data.values()
        .flat_map(|b| [sanitize(b.male), sanitize(b.female)])
        .fold(0.0, f64::max)
}

pub fn pie_summary(data: &ChartData) -> Vec<Summary> {
    vec![summarize("total", data.values().map(|c| &c.value))]
}

/// One summary per group, in display order.
pub fn grouped_summary(data: &GroupedSeries) -> Vec<Summary> {
    ordered_groups(data)
        .into_iter()
        .filter_map(|g| data.get(g).map(|cats| summarize(g, cats.values())))
        .collect()
}

/// Male, female and (when any bucket carries it) other.
pub fn pyramid_summary(data: &PyramidData) -> Vec<Summary> {
    let mut out = vec![
        summarize("male", data.values().map(|b| &b.male)),
        summarize("female", data.values().map(|b| &b.female)),
    ];
    if data.values().any(|b| b.other.is_some()) {
        out.push(summarize(
            "other",
            data.values().filter_map(|b| b.other.as_ref()),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn series(groups: &[(&str, &[(&str, f64)])]) -> GroupedSeries {
        groups
            .iter()
            .map(|(g, cats)| {
                (
                    g.to_string(),
                    cats.iter()
                        .map(|(c, v)| (c.to_string(), *v))
                        .collect::<IndexMap<_, _>>(),
                )
            })
            .collect()
    }

    #[test]
    fn numeric_groups_sort_by_value_not_text() {
        let d = series(&[("10", &[]), ("2", &[]), ("Other", &[]), ("1", &[])]);
        assert_eq!(ordered_groups(&d), ["1", "2", "10", "Other"]);
    }

    #[test]
    fn categories_follow_display_order_of_groups() {
        let a = series(&[("2", &[("y", 1.0)]), ("1", &[("x", 1.0), ("y", 2.0)])]);
        let b = series(&[("1", &[("x", 1.0), ("y", 2.0)]), ("2", &[("y", 1.0)])]);
        let ga = ordered_groups(&a);
        let gb = ordered_groups(&b);
        assert_eq!(ordered_categories(&a, &ga), ["x", "y"]);
        assert_eq!(ordered_categories(&a, &ga), ordered_categories(&b, &gb));
    }

    #[test]
    fn group_totals_ignore_invalid_values() {
        let d = series(&[("1", &[("x", 5.0), ("y", f64::NAN), ("z", -2.0)])]);
        assert_eq!(group_totals(&d, &["1"]), vec![5.0]);
    }
}

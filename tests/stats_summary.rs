use indexmap::IndexMap;
use palika_charts::models::{CategoryValue, ChartData, GroupedSeries, PyramidBucket, PyramidData};
use palika_charts::stats::{grouped_summary, pie_summary, pie_total, pyramid_summary};

#[test]
fn pie_summary_counts_invalid_as_missing() {
    let mut d = ChartData::new();
    d.insert("a".into(), CategoryValue::new("A", 10.0));
    d.insert("b".into(), CategoryValue::new("B", f64::NAN));
    d.insert("c".into(), CategoryValue::new("C", -3.0));
    d.insert("d".into(), CategoryValue::new("D", 4.0));

    let s = &pie_summary(&d)[0];
    assert_eq!(s.key, "total");
    assert_eq!(s.count, 4);
    assert_eq!(s.missing, 2);
    assert_eq!(s.total, 14.0);
    assert_eq!(s.min, Some(4.0));
    assert_eq!(s.max, Some(10.0));
    assert_eq!(pie_total(&d), 14.0);
}

#[test]
fn grouped_summary_follows_display_order() {
    let mut d = GroupedSeries::new();
    d.insert("10".into(), IndexMap::from([("x".to_string(), 1.0)]));
    d.insert("rural".into(), IndexMap::from([("x".to_string(), 2.0)]));
    d.insert(
        "2".into(),
        IndexMap::from([("x".to_string(), 3.0), ("y".to_string(), f64::NAN)]),
    );

    let sums = grouped_summary(&d);
    let keys: Vec<&str> = sums.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["2", "10", "rural"]);
    assert_eq!(sums[0].count, 2);
    assert_eq!(sums[0].missing, 1);
    assert_eq!(sums[0].total, 3.0);
}

#[test]
fn pyramid_summary_adds_other_only_when_present() {
    let mut d = PyramidData::new();
    d.insert("0-4".into(), PyramidBucket::new("0-4", 10.0, 12.0));
    d.insert("5-9".into(), PyramidBucket::new("5-9", 8.0, f64::NAN));
    let sums = pyramid_summary(&d);
    assert_eq!(sums.len(), 2);
    assert_eq!(sums[1].key, "female");
    assert_eq!(sums[1].missing, 1);
    assert_eq!(sums[1].max, Some(12.0));

    d.get_mut("5-9").unwrap().other = Some(1.0);
    let sums = pyramid_summary(&d);
    assert_eq!(sums.len(), 3);
    assert_eq!(sums[2].key, "other");
    assert_eq!(sums[2].count, 1);
}

#[test]
fn all_missing_group_has_no_extrema() {
    let mut d = GroupedSeries::new();
    d.insert("1".into(), IndexMap::from([("x".to_string(), f64::NAN)]));
    let s = &grouped_summary(&d)[0];
    assert_eq!(s.total, 0.0);
    assert_eq!(s.min, None);
    assert_eq!(s.max, None);
}

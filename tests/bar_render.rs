use indexmap::IndexMap;
use palika_charts::models::GroupedSeries;
use palika_charts::viz::{self, BarConfig, RenderConfig};

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

fn wards() -> GroupedSeries {
    series(&[
        ("3", &[("Pucca", 120.0), ("Semi-pucca", 40.0), ("Kachchi", 15.0)]),
        ("1", &[("Pucca", 80.0), ("Kachchi", 60.0)]),
        ("2", &[("Semi-pucca", 90.0), ("Other", 5.0)]),
    ])
}

#[test]
fn scale_is_shared_across_group_totals() {
    let d = series(&[("A", &[("x", 10.0)]), ("B", &[("x", 10.0), ("y", 10.0)])]);
    for cfg in [BarConfig::grouped(), BarConfig::stacked()] {
        let l = viz::bar_layout(&d, &cfg).unwrap();
        assert_eq!(l.max_total, 20.0);
        let a = l.groups[0].height();
        let b = l.groups[1].height();
        assert!((a * 2.0 - b).abs() < 1e-9, "A={a} B={b}");
        assert!((b - l.plot_h).abs() < 1e-9);
    }
}

#[test]
fn groups_sort_numerically_and_categories_by_first_appearance() {
    let l = viz::bar_layout(&wards(), &BarConfig::grouped()).unwrap();
    let keys: Vec<&str> = l.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, ["1", "2", "3"]);
    let cats: Vec<&str> = l.categories.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(cats, ["Pucca", "Kachchi", "Semi-pucca", "Other"]);
    assert!(l.groups.windows(2).all(|w| w[0].center_x < w[1].center_x));
}

#[test]
fn rendering_is_independent_of_group_insertion_order() {
    let a = wards();
    let mut b = GroupedSeries::new();
    for k in ["2", "1", "3"] {
        b.insert(k.to_string(), a[k].clone());
    }
    let cfg = BarConfig::grouped();
    assert_eq!(viz::render_grouped_bar(&a, &cfg), viz::render_grouped_bar(&b, &cfg));
    let cfg = BarConfig::stacked();
    assert_eq!(viz::render_stacked_bar(&a, &cfg), viz::render_stacked_bar(&b, &cfg));
}

#[test]
fn empty_and_zero_totals_render_placeholder() {
    let zero = series(&[("1", &[("x", 0.0)]), ("2", &[("y", f64::NAN)])]);
    for svg in [
        viz::render_grouped_bar(&GroupedSeries::new(), &BarConfig::grouped()),
        viz::render_grouped_bar(&zero, &BarConfig::grouped()),
        viz::render_stacked_bar(&zero, &BarConfig::stacked()),
    ] {
        assert!(svg.contains("No data available"));
        assert!(!svg.contains("<line"));
    }
}

#[test]
fn thin_stacked_segments_get_no_label() {
    let d = series(&[("1", &[("big", 100.0), ("tiny", 1.0)])]);
    let cfg = BarConfig::stacked();
    let l = viz::bar_layout(&d, &cfg).unwrap();
    let segs = &l.groups[0].segments;
    assert!(segs[0].height > cfg.min_segment_label_px);
    assert!(segs[1].height < cfg.min_segment_label_px);

    let svg = viz::render_stacked_bar(&d, &cfg);
    assert_eq!(svg.matches(r#"class="value""#).count(), 1);
    assert!(svg.contains(">100</text>"));
}

#[test]
fn grouped_bars_show_totals_only_when_asked() {
    let cfg = BarConfig::grouped();
    let svg = viz::render_grouped_bar(&wards(), &cfg);
    assert!(!svg.contains(r#"class="value-dark""#));

    let cfg = RenderConfig {
        show_values: Some(true),
        ..Default::default()
    }
    .grouped_bar();
    let svg = viz::render_grouped_bar(&wards(), &cfg);
    assert_eq!(svg.matches(r#"class="value-dark""#).count(), 3);
    assert!(svg.contains(">175</text>"));
}

#[test]
fn axes_use_localized_digits() {
    let cfg = RenderConfig {
        nepali_numbers: Some(true),
        ..Default::default()
    }
    .grouped_bar();
    let svg = viz::render_grouped_bar(&wards(), &cfg);
    // max total 175 -> top tick
    assert!(svg.contains(">१७५</text>"));
    // ward keys
    assert!(svg.contains(">१</text>"));
    assert!(svg.contains(">३</text>"));
    assert!(!svg.contains(">175</text>"));
}

#[test]
fn y_axis_has_evenly_spaced_ticks() {
    let cfg = BarConfig::grouped();
    let svg = viz::render_grouped_bar(&series(&[("1", &[("x", 50.0)])]), &cfg);
    for label in ["0", "10", "20", "30", "40", "50"] {
        assert!(svg.contains(&format!(">{label}</text>")), "missing tick {label}");
    }
}

#[test]
fn legend_band_is_below_the_plot() {
    let cfg = BarConfig::grouped();
    let l = viz::bar_layout(&wards(), &cfg).unwrap();
    let band_top = cfg.canvas.height - cfg.legend_height;
    assert!(l.baseline() + cfg.margins.bottom <= band_top + 1e-9);

    let no_legend = RenderConfig {
        show_legend: Some(false),
        ..Default::default()
    }
    .grouped_bar();
    let l2 = viz::bar_layout(&wards(), &no_legend).unwrap();
    assert!(l2.plot_h > l.plot_h);
}

#[test]
fn legend_wraps_three_per_row() {
    let cfg = BarConfig::grouped();
    let svg = viz::render_grouped_bar(&wards(), &cfg);
    assert_eq!(svg.matches(r#"class="legend""#).count(), 4);

    let cfg = RenderConfig {
        legend_items_per_row: Some(2),
        ..Default::default()
    }
    .grouped_bar();
    assert_eq!(cfg.legend_items_per_row, 2);
}

#[test]
fn max_bar_width_caps_slot() {
    let cfg = RenderConfig {
        max_bar_width: Some(20.0),
        ..Default::default()
    }
    .grouped_bar();
    let l = viz::bar_layout(&wards(), &cfg).unwrap();
    assert_eq!(l.slot_width, 20.0);
    assert!((l.bar_width - 16.0).abs() < 1e-9);
}

#[test]
fn segment_exactly_at_label_threshold_gets_no_label() {
    // plot height 287 - 15 - 30 - 50 = 192; 8 / 128 * 192 = 12 exactly
    let cfg = RenderConfig {
        height: Some(287.0),
        ..Default::default()
    }
    .stacked_bar();
    let d = series(&[("1", &[("big", 120.0), ("edge", 8.0)])]);
    let l = viz::bar_layout(&d, &cfg).unwrap();
    assert_eq!(l.plot_h, 192.0);
    assert_eq!(l.groups[0].segments[1].height, cfg.min_segment_label_px);

    let svg = viz::render_stacked_bar(&d, &cfg);
    assert_eq!(svg.matches(r#"class="value""#).count(), 1);
    assert!(svg.contains(">120</text>"));
    assert!(!svg.contains(">8</text>"));
}

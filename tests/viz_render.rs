use std::fs;
use std::path::Path;
use palika_charts::storage;
use palika_charts::viz::{ChartKind, RenderConfig};
use tempfile::tempdir;

const PIE: &str = "key,label,value\nhindu,Hindu,812\nbuddhist,Buddhist,143\nkirat,Kirat,37\n";
const GROUPED: &str = "group,category,value\n1,Pucca,80\n1,Kachchi,60\n2,Pucca,120\n2,Other,5\n";
const PYRAMID: &str = "bucket,label,male,female,other\n0-4,0-4,410,395,\n5-9,5-9,380,402,1\n";

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let p = dir.join(name);
    fs::write(&p, body).unwrap();
    p
}

fn assert_svg(svg: &str, w: &str, h: &str) {
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(&format!(r#"width="{w}" height="{h}""#)));
    assert!(svg.contains("<rect"));
    assert!(!svg.contains("No data available"));
}

#[test]
fn every_kind_renders_from_csv() {
    let dir = tempdir().unwrap();
    let pie = write(dir.path(), "pie.csv", PIE);
    let grouped = write(dir.path(), "grouped.csv", GROUPED);
    let pyramid = write(dir.path(), "pyramid.csv", PYRAMID);
    let cfg = RenderConfig::default();

    let svg = storage::render_file(ChartKind::Pie, &pie, &cfg).unwrap();
    assert_svg(&svg, "500", "300");
    assert_eq!(svg.matches("<path").count(), 3);

    let svg = storage::render_file(ChartKind::GroupedBar, &grouped, &cfg).unwrap();
    assert_svg(&svg, "600", "400");

    let svg = storage::render_file(ChartKind::StackedBar, &grouped, &cfg).unwrap();
    assert_svg(&svg, "400", "300");

    let svg = storage::render_file(ChartKind::Pyramid, &pyramid, &cfg).unwrap();
    assert_svg(&svg, "600", "400");
}

#[test]
fn config_overrides_reach_every_renderer() {
    let dir = tempdir().unwrap();
    let grouped = write(dir.path(), "grouped.csv", GROUPED);
    let cfg = RenderConfig {
        width: Some(900.0),
        height: Some(450.0),
        title: Some("Houses by <type> & ward".into()),
        ..Default::default()
    };
    for kind in [ChartKind::GroupedBar, ChartKind::StackedBar] {
        let svg = storage::render_file(kind, &grouped, &cfg).unwrap();
        assert_svg(&svg, "900", "450");
        assert!(svg.contains("Houses by &lt;type&gt; &amp; ward"));
    }
}

#[test]
fn empty_csv_renders_placeholder() {
    let dir = tempdir().unwrap();
    let pie = write(dir.path(), "empty.csv", "key,label,value\n");
    let svg = storage::render_file(ChartKind::Pie, &pie, &RenderConfig::default()).unwrap();
    assert!(svg.contains("No data available"));
    assert_eq!(svg.matches("<text").count(), 1);
}

#[test]
fn output_is_deterministic() {
    let dir = tempdir().unwrap();
    let pyramid = write(dir.path(), "pyramid.csv", PYRAMID);
    let cfg = RenderConfig {
        nepali_numbers: Some(true),
        ..Default::default()
    };
    let a = storage::render_file(ChartKind::Pyramid, &pyramid, &cfg).unwrap();
    let b = storage::render_file(ChartKind::Pyramid, &pyramid, &cfg).unwrap();
    assert_eq!(a, b);
}

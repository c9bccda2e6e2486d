//! Loading datasets and render options from disk, and writing chart output.
//!
//! Datasets come as JSON (the same shape the models deserialize from) or as tidy
//! CSV, one row per value:
//! - pie: `key,label,value[,color]`
//! - grouped/stacked bars: `group,category,value`
//! - pyramid: `bucket,label,male,female[,other]`

use crate::models::{
    CategoryValue, ChartData, GroupedSeries, PyramidBucket, PyramidData, de_f64_lenient,
    de_opt_f64_lenient,
};
use crate::stats::Summary;
use crate::viz::{self, ChartKind, RenderConfig};
use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("unsupported data format {0:?} (expected .json or .csv)")]
    UnsupportedFormat(String),
    #[error("row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

enum Format {
    Json,
    Csv,
}

fn format_of(path: &Path) -> Result<Format, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "json" => Ok(Format::Json),
        "csv" => Ok(Format::Csv),
        other => Err(DataError::UnsupportedFormat(other.to_string())),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing JSON in {}", path.display()))
}

fn read_csv_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut rows = Vec::new();
    for (i, rec) in rdr.deserialize().enumerate() {
        // +2: header line plus 1-based numbering
        let row: T = rec.map_err(|source| DataError::Csv { row: i + 2, source })?;
        rows.push(row);
    }
    log::debug!("read {} CSV rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[derive(Deserialize)]
struct PieRow {
    key: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(deserialize_with = "de_f64_lenient")]
    value: f64,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Deserialize)]
struct GroupedRow {
    group: String,
    category: String,
    #[serde(deserialize_with = "de_f64_lenient")]
    value: f64,
}

#[derive(Deserialize)]
struct PyramidRow {
    bucket: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(deserialize_with = "de_f64_lenient")]
    male: f64,
    #[serde(deserialize_with = "de_f64_lenient")]
    female: f64,
    #[serde(default, deserialize_with = "de_opt_f64_lenient")]
    other: Option<f64>,
}

/// Load pie data from `.json` or `.csv`. A CSV row without a label uses its key.
pub fn load_chart_data<P: AsRef<Path>>(path: P) -> Result<ChartData> {
    let path = path.as_ref();
    match format_of(path)? {
        Format::Json => read_json(path),
        Format::Csv => Ok(read_csv_rows::<PieRow>(path)?
            .into_iter()
            .map(|r| {
                let label = r.label.filter(|l| !l.is_empty()).unwrap_or_else(|| r.key.clone());
                let cat = CategoryValue {
                    value: r.value,
                    label,
                    color: r.color.filter(|c| !c.is_empty()),
                };
                (r.key, cat)
            })
            .collect()),
    }
}

/// Load grouped series from `.json` or long-format `.csv`. Repeated
/// (group, category) rows are summed.
pub fn load_grouped_series<P: AsRef<Path>>(path: P) -> Result<GroupedSeries> {
    let path = path.as_ref();
    match format_of(path)? {
        Format::Json => read_json(path),
        Format::Csv => {
            let mut out = GroupedSeries::new();
            for r in read_csv_rows::<GroupedRow>(path)? {
                *out.entry(r.group)
                    .or_default()
                    .entry(r.category)
                    .or_insert(0.0) += r.value;
            }
            Ok(out)
        }
    }
}

/// Load pyramid buckets from `.json` or `.csv`, keeping row order.
pub fn load_pyramid_data<P: AsRef<Path>>(path: P) -> Result<PyramidData> {
    let path = path.as_ref();
    match format_of(path)? {
        Format::Json => read_json(path),
        Format::Csv => Ok(read_csv_rows::<PyramidRow>(path)?
            .into_iter()
            .map(|r| {
                let label = r
                    .label
                    .filter(|l| !l.is_empty())
                    .unwrap_or_else(|| r.bucket.clone());
                let bucket = PyramidBucket {
                    male: r.male,
                    female: r.female,
                    other: r.other,
                    label,
                };
                (r.bucket, bucket)
            })
            .collect()),
    }
}

/// Load render options from a JSON file. Unknown keys are ignored.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RenderConfig> {
    read_json(path.as_ref())
}

/// Load the dataset at `data_path` and render it as `kind`.
pub fn render_file<P: AsRef<Path>>(
    kind: ChartKind,
    data_path: P,
    config: &RenderConfig,
) -> Result<String> {
    let p = data_path.as_ref();
    let svg = match kind {
        ChartKind::Pie => viz::render_pie(&load_chart_data(p)?, &config.pie()),
        ChartKind::GroupedBar => {
            viz::render_grouped_bar(&load_grouped_series(p)?, &config.grouped_bar())
        }
        ChartKind::StackedBar => {
            viz::render_stacked_bar(&load_grouped_series(p)?, &config.stacked_bar())
        }
        ChartKind::Pyramid => viz::render_pyramid(&load_pyramid_data(p)?, &config.pyramid()),
    };
    Ok(svg)
}

/// Write the SVG document as-is.
pub fn save_svg<P: AsRef<Path>>(svg: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} bytes of SVG to {}", svg.len(), path.display());
    Ok(())
}

/// Write the base64 `data:` URL of the SVG, newline-terminated.
pub fn save_data_url<P: AsRef<Path>>(svg: &str, path: P) -> Result<()> {
    let mut f = File::create(path.as_ref())
        .with_context(|| format!("creating {}", path.as_ref().display()))?;
    writeln!(f, "{}", viz::to_data_url(svg))?;
    Ok(())
}

/// Save summaries as CSV with header.
pub fn save_summary_csv<P: AsRef<Path>>(summaries: &[Summary], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("key", "count", "missing", "total", "min", "max"))?;
    for s in summaries {
        wtr.serialize((&s.key, s.count, s.missing, s.total, s.min, s.max))?;
    }
    wtr.flush()?;
    Ok(())
}

//! palika_charts
//!
//! A lightweight Rust library for rendering municipal census data (ward
//! breakdowns, categorical distributions, age/sex pyramids) as standalone SVG.
//! Pairs with the `palika-charts` CLI.
//!
//! ### Features
//! - Pie, grouped bar, stacked bar and population pyramid charts
//! - Pure `(data, config) -> String` renderers: no I/O, no shared state
//! - Devanagari digits for axis ticks, legend counts and value labels
//! - `data:` URL helpers for embedding charts in HTML/PDF reports
//! - Load datasets from JSON or CSV, render options from JSON
//!
//! ### Example
//! ```
//! use palika_charts::models::{CategoryValue, ChartData};
//! use palika_charts::viz::{self, RenderConfig};
//!
//! let mut data = ChartData::new();
//! data.insert("hindu".into(), CategoryValue::new("Hindu", 812.0));
//! data.insert("buddhist".into(), CategoryValue::new("Buddhist", 143.0));
//!
//! let cfg = RenderConfig { nepali_numbers: Some(true), ..Default::default() };
//! let svg = viz::render_pie(&data, &cfg.pie());
//! assert!(svg.contains("(८१२)"));
//! let url = viz::to_data_url(&svg);
//! assert!(url.starts_with("data:image/svg+xml;base64,"));
//! ```

pub mod models;
pub mod numerals;
pub mod stats;
pub mod storage;
pub mod viz;

pub use models::{CategoryValue, ChartData, GroupedSeries, PyramidBucket, PyramidData};
pub use numerals::{NumeralFormatter, format_number};

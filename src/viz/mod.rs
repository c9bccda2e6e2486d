//! Visualization: render census datasets to standalone **SVG** strings.
//!
//! - Pie, grouped bar, stacked bar and population pyramid charts
//! - Fixed, injectable palette (Microsoft Office series colours by default)
//! - Optional Devanagari digits for every tick, legend count and value label
//! - Graceful degradation: empty or all-zero data renders a "no data" placeholder
//!
//! Every renderer is a pure `(data, config) -> String` function. Nothing here
//! touches the filesystem; see [`crate::storage`] for that.

pub mod bar;
pub mod data_url;
pub mod legend;
pub mod pie;
pub mod pyramid;
pub mod svg;
pub mod text;
pub mod types;
pub mod util;

pub use bar::{BarLayout, bar_layout, render_grouped_bar, render_stacked_bar};
pub use data_url::{DataUrlError, decode_data_url, to_data_url, to_data_url_percent};
pub use pie::{Wedge, pie_layout, render_pie};
pub use pyramid::{PyramidLayout, pyramid_layout, render_pyramid};
pub use types::{BarConfig, BarKind, PieConfig, PyramidConfig, RenderConfig};
pub use util::Palette;

/// Chart kinds this crate can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    GroupedBar,
    StackedBar,
    Pyramid,
}

//! Mapdeck translates a declarative map chart description into configured map layers.
//!
//! A chart arrives from a data producer as a top-level JSON spec (camera and map style) and a list
//! of layers, each with tabular data and its own JSON spec:
//!
//! ```
//! use mapdeck::{ChartOutput, MapChartBuilder};
//! use mapdeck::render::JsonRenderer;
//! use mapdeck_types::Dataset;
//!
//! let data = Dataset::from_json_str(r#"[{"lat": 1, "lon": 2, "size": 50}]"#)?;
//!
//! let chart = MapChartBuilder::new(600.0)
//!     .with_spec(r#"{"viewport": {"latitude": 1, "longitude": 2, "zoom": 6}}"#)
//!     .with_layer(data, r#"{"type": "ScatterplotLayer", "encoding": {"radius": "size"}}"#)
//!     .build();
//!
//! let mut renderer = JsonRenderer::new();
//! assert_eq!(chart.render(&mut renderer), ChartOutput::Rendered { layer_count: 1 });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Main components
//!
//! * [`Viewport`] is the camera state with defaults filled in for the fields the spec omits, and
//!   [`style`] resolves the map style name into a style URL.
//! * [`layer`] turns a layer spec and its data into a [`LayerConfig`](layer::LayerConfig): the
//!   spec encoding becomes per-row [getters](layer::Getter), and every channel the encoding does
//!   not mention gets a [default getter](layer::defaults) of the layer kind.
//! * [`MapChart`] puts it all together and gives the result to a
//!   [`MapRenderer`](render::MapRenderer), which stands for the library that actually draws the
//!   map. Any failure on the way is returned as an [`ErrorNotice`] instead of an error.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod chart;
mod color;
pub mod error;
pub mod layer;
pub mod render;
pub mod style;
mod view;

#[cfg(test)]
mod tests;

pub use chart::{
    ChartElement, ChartOutput, ChartSpec, ErrorNotice, MapChart, MapChartBuilder, ACCESS_TOKEN_ENV,
};
pub use color::Color;
pub use view::{Viewport, ViewportSpec};

// Reexport mapdeck_types
pub use mapdeck_types;

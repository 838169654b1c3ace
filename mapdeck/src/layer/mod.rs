//! [Layers](LayerConfig) bind tabular data to the visual channels of a map layer.
//!
//! A layer is described by a [`LayerSpec`]: a type name, an optional encoding that maps channels
//! to columns or constants, and any additional layer properties. [`build_layer`] turns the spec
//! into a [`LayerConfig`], filling every channel the spec does not encode with a
//! [default getter](defaults) for the layer kind.
//!
//! ```
//! use mapdeck::layer::{build_layer, LayerSpec};
//! use mapdeck_types::Dataset;
//! use serde_json::json;
//!
//! let data: Dataset = serde_json::from_value(json!([{"lat": 1, "lon": 2, "size": 50}]))?;
//! let spec = LayerSpec::new("ScatterplotLayer").with_encoding("radius", "size");
//!
//! let layer = build_layer(data, spec)?;
//! let row = &layer.data().rows()[0];
//!
//! assert_eq!(layer.get("getPosition", row), Some(json!([2, 1])));
//! assert_eq!(layer.get("getRadius", row), Some(json!(50)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
pub mod defaults;
mod getter;
mod kind;
mod spec;

pub use config::{build_layer, LayerConfig, LayerEntry};
pub use getter::{getter_name, BuiltinGetter, Getter};
pub use kind::LayerKind;
pub use spec::{parse_encodings, LayerSpec};

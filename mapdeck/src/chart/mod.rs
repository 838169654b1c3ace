//! [`MapChart`] is the root of a rendered chart: it resolves the viewport and the map style from the
//! chart spec, builds every layer and gives the result to a [`MapRenderer`].

use std::any::Any;
use std::fmt::{Display, Formatter};
use std::panic::{self, AssertUnwindSafe};

use mapdeck_types::Value;
use serde::{Deserialize, Serialize};

use crate::error::MapDeckError;
use crate::layer::{LayerConfig, LayerEntry};
use crate::render::{MapFrame, MapRenderer};
use crate::style::resolve_style_url;
use crate::view::{Viewport, ViewportSpec};

mod builder;

pub use builder::{MapChartBuilder, ACCESS_TOKEN_ENV};

/// Chart element as sent by the data producer.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartElement {
    /// Top-level chart spec as a JSON string. See [`ChartSpec`].
    #[serde(default)]
    pub spec: Option<String>,
    /// Layers of the chart, bottom first.
    #[serde(default)]
    pub layers: Vec<LayerEntry>,
}

impl ChartElement {
    /// Parses a chart element from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, MapDeckError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Top-level chart spec.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Camera parameters and map style.
    #[serde(default)]
    pub viewport: Option<ViewportSpec>,
}

impl ChartSpec {
    /// Parses the chart spec. An empty string and `null` are the same as an empty spec.
    pub fn from_json_str(json: &str) -> Result<Self, MapDeckError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_json::from_str::<Value>(json)? {
            Value::Null => {
                log::warn!("Chart spec is null, using the default viewport");
                Ok(Self::default())
            }
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(MapDeckError::MalformedSpecification(format!(
                "chart spec must be a JSON object, got: {other}"
            ))),
        }
    }
}

/// Error shown in place of a chart that failed to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    kind: String,
    message: String,
}

impl ErrorNotice {
    /// Creates a new notice.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Kind of the error, e.g. `UnsupportedLayerType`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&MapDeckError> for ErrorNotice {
    fn from(value: &MapDeckError) -> Self {
        Self::new(value.kind(), value.to_string())
    }
}

impl Display for ErrorNotice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Result of rendering a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutput {
    /// The renderer drew the chart with the given number of layers.
    Rendered {
        /// Number of layers drawn over the base map.
        layer_count: usize,
    },
    /// The chart could not be rendered.
    Error(ErrorNotice),
}

impl ChartOutput {
    /// Error notice, if rendering failed.
    pub fn error(&self) -> Option<&ErrorNotice> {
        match self {
            ChartOutput::Rendered { .. } => None,
            ChartOutput::Error(notice) => Some(notice),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ChartView {
    viewport: Viewport,
    map_style: String,
}

/// A chart: viewport, map style and layers.
///
/// The viewport and the map style are resolved once when the chart is created. Layers are built
/// from their entries every time the chart is rendered. Use [`MapChartBuilder`] to create a
/// chart.
#[derive(Debug)]
pub struct MapChart {
    view: Result<ChartView, MapDeckError>,
    layers: Vec<LayerEntry>,
    access_token: Option<String>,
    controller: bool,
}

impl MapChart {
    /// Creates a chart from the element with the given container width.
    pub fn new(element: ChartElement, width: f64) -> Self {
        MapChartBuilder::new(width).with_element(element).build()
    }

    pub(crate) fn from_parts(
        spec: Option<&str>,
        width: f64,
        layers: Vec<LayerEntry>,
        access_token: Option<String>,
        controller: bool,
    ) -> Self {
        let view = spec
            .map(ChartSpec::from_json_str)
            .unwrap_or_else(|| Ok(ChartSpec::default()))
            .map(|spec| {
                let viewport_spec = spec.viewport.as_ref();
                ChartView {
                    viewport: Viewport::from_spec(viewport_spec, width),
                    map_style: resolve_style_url(
                        viewport_spec.and_then(|v| v.map_style.as_deref()),
                    ),
                }
            });

        Self {
            view,
            layers,
            access_token,
            controller,
        }
    }

    /// Viewport of the chart, if the chart spec is valid.
    pub fn viewport(&self) -> Option<&Viewport> {
        self.view.as_ref().ok().map(|view| &view.viewport)
    }

    /// Full URL of the map style, if the chart spec is valid.
    pub fn map_style(&self) -> Option<&str> {
        self.view.as_ref().ok().map(|view| view.map_style.as_str())
    }

    /// Access token for the map style service.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Layer entries of the chart.
    pub fn layers(&self) -> &[LayerEntry] {
        &self.layers
    }

    /// Builds configurations of all layers of the chart. Fails on the first layer that cannot be
    /// built.
    pub fn build_layers(&self) -> Result<Vec<LayerConfig>, MapDeckError> {
        self.layers.iter().map(LayerEntry::build).collect()
    }

    /// Builds the layers and renders the chart with the renderer.
    ///
    /// This method never fails: any error while building layers or rendering, including a panic
    /// in the renderer, is returned as [`ChartOutput::Error`].
    pub fn render(&self, renderer: &mut dyn MapRenderer) -> ChartOutput {
        match panic::catch_unwind(AssertUnwindSafe(|| self.try_render(renderer))) {
            Ok(Ok(layer_count)) => ChartOutput::Rendered { layer_count },
            Ok(Err(err)) => {
                log::error!("Failed to render map chart: {err}");
                ChartOutput::Error(ErrorNotice::from(&err))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::error!("Renderer panicked while drawing map chart: {message}");
                ChartOutput::Error(ErrorNotice::new("Panic", message))
            }
        }
    }

    fn try_render(&self, renderer: &mut dyn MapRenderer) -> Result<usize, MapDeckError> {
        let view = match &self.view {
            Ok(view) => view,
            Err(err) => return Err(MapDeckError::MalformedSpecification(err.to_string())),
        };

        let layers = self.build_layers()?;
        let frame = MapFrame {
            viewport: &view.viewport,
            map_style: &view.map_style,
            access_token: self.access_token.as_deref(),
            controller: self.controller,
            layers: &layers,
        };

        renderer.render(&frame)?;
        log::debug!("Rendered map chart with {} layers", layers.len());

        Ok(layers.len())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

use mapdeck_types::{Map, Value};
use serde_json::json;

use super::{MapFrame, MapRenderer};
use crate::error::MapDeckError;
use crate::layer::LayerConfig;

/// Renderer that writes the frame into a JSON scene instead of drawing it.
///
/// The scene has the viewport, the style URL and, for every layer, its type, its properties and
/// the evaluated accessors of every row under `data`:
///
/// ```json
/// {
///   "viewport": {"width": 600.0, "height": 500.0, ...},
///   "mapStyle": "mapbox://styles/mapbox/light-v9",
///   "controller": true,
///   "layers": [
///     {"type": "ScatterplotLayer", "opacity": 0.8, "data": [{"getPosition": [2, 1], ...}]}
///   ]
/// }
/// ```
///
/// The access token is not written into the scene.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    scene: Option<Value>,
}

impl JsonRenderer {
    /// Creates a renderer with no scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene of the last rendered frame.
    pub fn scene(&self) -> Option<&Value> {
        self.scene.as_ref()
    }

    /// Takes the scene of the last rendered frame out of the renderer.
    pub fn take_scene(&mut self) -> Option<Value> {
        self.scene.take()
    }
}

impl MapRenderer for JsonRenderer {
    fn render(&mut self, frame: &MapFrame<'_>) -> Result<(), MapDeckError> {
        let viewport = serde_json::to_value(frame.viewport)
            .map_err(|err| MapDeckError::Render(format!("failed to encode viewport: {err}")))?;
        let layers: Vec<Value> = frame.layers.iter().map(layer_scene).collect();

        self.scene = Some(json!({
            "viewport": viewport,
            "mapStyle": frame.map_style,
            "controller": frame.controller,
            "layers": layers,
        }));

        Ok(())
    }
}

fn layer_scene(layer: &LayerConfig) -> Value {
    let mut scene: Map<String, Value> = layer.props().clone();
    scene.insert("type".into(), Value::from(layer.kind().name()));

    let data = layer
        .evaluate()
        .into_iter()
        .map(|accessors| {
            Value::Object(
                accessors
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), value))
                    .collect(),
            )
        })
        .collect();
    scene.insert("data".into(), Value::Array(data));

    Value::Object(scene)
}

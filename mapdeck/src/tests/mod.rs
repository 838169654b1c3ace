use mapdeck_types::{Dataset, Row, Value};

use crate::error::MapDeckError;
use crate::layer::LayerConfig;
use crate::render::{MapFrame, MapRenderer};
use crate::view::Viewport;

pub fn row(value: Value) -> Row {
    serde_json::from_value(value).expect("row fixture must be a JSON object")
}

pub fn rows(value: Value) -> Dataset {
    serde_json::from_value(value).expect("dataset fixture must be an array of objects")
}

pub struct RecordedFrame {
    pub viewport: Viewport,
    pub map_style: String,
    pub access_token: Option<String>,
    pub controller: bool,
    pub layers: Vec<LayerConfig>,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<RecordedFrame>,
}

impl MapRenderer for RecordingRenderer {
    fn render(&mut self, frame: &MapFrame<'_>) -> Result<(), MapDeckError> {
        self.frames.push(RecordedFrame {
            viewport: *frame.viewport,
            map_style: frame.map_style.to_string(),
            access_token: frame.access_token.map(str::to_string),
            controller: frame.controller,
            layers: frame.layers.to_vec(),
        });
        Ok(())
    }
}

pub struct FailingRenderer;

impl MapRenderer for FailingRenderer {
    fn render(&mut self, _frame: &MapFrame<'_>) -> Result<(), MapDeckError> {
        Err(MapDeckError::Render("no rendering context".into()))
    }
}

pub struct PanickingRenderer;

impl MapRenderer for PanickingRenderer {
    fn render(&mut self, _frame: &MapFrame<'_>) -> Result<(), MapDeckError> {
        panic!("renderer is broken")
    }
}

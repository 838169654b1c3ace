//! Renderer is the boundary between the chart and the rendering library that actually draws the
//! map. The chart resolves everything the library needs into a [`MapFrame`] and calls
//! [`MapRenderer::render`] with it.

use crate::error::MapDeckError;
use crate::layer::LayerConfig;
use crate::view::Viewport;

mod json;

pub use json::JsonRenderer;

/// Everything needed to draw one chart.
#[derive(Debug, Clone, Copy)]
pub struct MapFrame<'a> {
    /// Camera state.
    pub viewport: &'a Viewport,
    /// Full URL of the base map style.
    pub map_style: &'a str,
    /// Access token for the map style service.
    pub access_token: Option<&'a str>,
    /// Whether the user can move the camera.
    pub controller: bool,
    /// Layers to draw over the base map, bottom first. Can be empty.
    pub layers: &'a [LayerConfig],
}

/// External rendering library.
pub trait MapRenderer {
    /// Draws the frame.
    fn render(&mut self, frame: &MapFrame<'_>) -> Result<(), MapDeckError>;
}

impl<T: MapRenderer + ?Sized> MapRenderer for &mut T {
    fn render(&mut self, frame: &MapFrame<'_>) -> Result<(), MapDeckError> {
        (**self).render(frame)
    }
}

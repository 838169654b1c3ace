use mapdeck_types::TabularData;

use super::{ChartElement, MapChart};
use crate::layer::LayerEntry;

/// Environment variable read by [`MapChartBuilder::with_access_token_from_env`].
pub const ACCESS_TOKEN_ENV: &str = "MAPBOX_API_KEY";

/// Convenience type to initialize a [`MapChart`].
///
/// ```
/// use mapdeck::MapChartBuilder;
/// use mapdeck_types::Dataset;
///
/// let chart = MapChartBuilder::new(600.0)
///     .with_spec(r#"{"viewport": {"mapStyle": "dark-v9", "zoom": 4}}"#)
///     .with_layer(Dataset::default(), r#"{"type": "ScatterplotLayer"}"#)
///     .build();
///
/// assert_eq!(chart.map_style(), Some("mapbox://styles/mapbox/dark-v9"));
/// assert_eq!(chart.layers().len(), 1);
/// ```
pub struct MapChartBuilder {
    width: f64,
    spec: Option<String>,
    layers: Vec<LayerEntry>,
    access_token: Option<String>,
    controller: bool,
}

impl MapChartBuilder {
    /// Creates a builder for a chart in a container of the given width. The width is used unless
    /// the chart spec sets its own.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            spec: None,
            layers: vec![],
            access_token: None,
            controller: true,
        }
    }

    /// Sets the top-level chart spec JSON. See [`super::ChartSpec`].
    pub fn with_spec(mut self, spec: impl Into<String>) -> Self {
        self.spec = Some(spec.into());
        self
    }

    /// Adds a layer at the top of the chart.
    pub fn with_layer(mut self, data: impl Into<TabularData>, spec: impl Into<String>) -> Self {
        self.layers.push(LayerEntry::new(data, spec));
        self
    }

    /// Replaces the spec and the layers with the ones of the element.
    pub fn with_element(mut self, element: ChartElement) -> Self {
        self.spec = element.spec;
        self.layers = element.layers;
        self
    }

    /// Sets the access token for the map style service.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Reads the access token from the [`ACCESS_TOKEN_ENV`] environment variable. Leaves the
    /// current token in place if the variable is not set.
    pub fn with_access_token_from_env(mut self) -> Self {
        match std::env::var(ACCESS_TOKEN_ENV) {
            Ok(token) if !token.is_empty() => self.access_token = Some(token),
            _ => log::debug!("{ACCESS_TOKEN_ENV} is not set, map style access token is unchanged"),
        }
        self
    }

    /// Sets whether the user can move the camera. Defaults to `true`.
    pub fn with_controller(mut self, controller: bool) -> Self {
        self.controller = controller;
        self
    }

    /// Consumes the builder and creates the chart.
    ///
    /// The chart spec is parsed here. If it is malformed, the chart is still created and reports
    /// the error when rendered.
    pub fn build(self) -> MapChart {
        let Self {
            width,
            spec,
            layers,
            access_token,
            controller,
        } = self;

        MapChart::from_parts(spec.as_deref(), width, layers, access_token, controller)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use mapdeck_types::Dataset;

    use super::*;

    #[test]
    fn constructs_chart_with_default_parameters() {
        let chart = MapChartBuilder::new(320.0).build();

        let viewport = chart.viewport().unwrap();
        assert_relative_eq!(viewport.width(), 320.0);
        assert_relative_eq!(viewport.height(), 500.0);
        assert_eq!(chart.map_style(), Some("mapbox://styles/mapbox/light-v9"));
        assert!(chart.access_token().is_none());
        assert!(chart.layers().is_empty());
    }

    #[test]
    fn spec_width_wins_over_container_width() {
        let chart = MapChartBuilder::new(320.0)
            .with_spec(r#"{"viewport": {"width": 100}}"#)
            .build();

        assert_relative_eq!(chart.viewport().unwrap().width(), 100.0);
    }

    #[test]
    fn with_element_replaces_spec_and_layers() {
        let element = ChartElement {
            spec: None,
            layers: vec![LayerEntry::new(Dataset::default(), r#"{"type": "TextLayer"}"#)],
        };
        let chart = MapChartBuilder::new(10.0)
            .with_spec("{broken")
            .with_layer(Dataset::default(), r#"{"type": "ArcLayer"}"#)
            .with_layer(Dataset::default(), r#"{"type": "ArcLayer"}"#)
            .with_element(element)
            .build();

        assert!(chart.viewport().is_some());
        assert_eq!(chart.layers().len(), 1);
    }

    #[test]
    fn url_map_style_is_kept() {
        let chart = MapChartBuilder::new(10.0)
            .with_spec(r#"{"viewport": {"mapStyle": "https://tiles.example.com/style.json"}}"#)
            .build();

        assert_eq!(chart.map_style(), Some("https://tiles.example.com/style.json"));
    }
}

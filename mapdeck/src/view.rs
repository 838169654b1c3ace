use serde::{Deserialize, Serialize};

const DEFAULT_HEIGHT: f64 = 500.0;
const DEFAULT_ZOOM: f64 = 1.0;

/// Camera parameters as they come in the `viewport` object of a chart spec. Every field is
/// optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportSpec {
    /// Width of the map in pixels.
    pub width: Option<f64>,
    /// Height of the map in pixels.
    pub height: Option<f64>,
    /// Longitude of the map center.
    pub longitude: Option<f64>,
    /// Latitude of the map center.
    pub latitude: Option<f64>,
    /// Pitch angle in degrees.
    pub pitch: Option<f64>,
    /// Bearing angle in degrees.
    pub bearing: Option<f64>,
    /// Zoom level.
    pub zoom: Option<f64>,
    /// Map style short name or URL. See [`crate::style::resolve_style_url`].
    pub map_style: Option<String>,
}

/// Complete camera state of a chart. A viewport does not change after it is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    width: f64,
    height: f64,
    longitude: f64,
    latitude: f64,
    pitch: f64,
    bearing: f64,
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: DEFAULT_HEIGHT,
            longitude: 0.0,
            latitude: 0.0,
            pitch: 0.0,
            bearing: 0.0,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    /// Creates a viewport from the spec, substituting defaults for missing fields.
    ///
    /// Width falls back to `fallback_width`; height to 500; zoom to 1; longitude, latitude,
    /// pitch and bearing to 0. Zero counts as a missing value.
    pub fn from_spec(spec: Option<&ViewportSpec>, fallback_width: f64) -> Self {
        let Some(spec) = spec else {
            return Self {
                width: fallback_width,
                ..Default::default()
            };
        };

        let defaults = Self::default();
        Self {
            width: or_default(spec.width, fallback_width),
            height: or_default(spec.height, defaults.height),
            longitude: or_default(spec.longitude, defaults.longitude),
            latitude: or_default(spec.latitude, defaults.latitude),
            pitch: or_default(spec.pitch, defaults.pitch),
            bearing: or_default(spec.bearing, defaults.bearing),
            zoom: or_default(spec.zoom, defaults.zoom),
        }
    }

    /// Width of the map in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the map in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Longitude of the map center.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude of the map center.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Pitch angle in degrees.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Bearing angle in degrees.
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    /// Zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

fn or_default(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| *v != 0.0 && !v.is_nan()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn missing_viewport_uses_defaults() {
        let viewport = Viewport::from_spec(None, 640.0);

        assert_relative_eq!(viewport.width(), 640.0);
        assert_relative_eq!(viewport.height(), 500.0);
        assert_relative_eq!(viewport.zoom(), 1.0);
        assert_relative_eq!(viewport.longitude(), 0.0);
        assert_relative_eq!(viewport.latitude(), 0.0);
        assert_relative_eq!(viewport.pitch(), 0.0);
        assert_relative_eq!(viewport.bearing(), 0.0);
    }

    #[test]
    fn given_fields_override_defaults() {
        let spec = ViewportSpec {
            height: Some(300.0),
            latitude: Some(37.76),
            longitude: Some(-122.4),
            pitch: Some(50.0),
            zoom: Some(11.0),
            ..Default::default()
        };
        let viewport = Viewport::from_spec(Some(&spec), 640.0);

        assert_relative_eq!(viewport.width(), 640.0);
        assert_relative_eq!(viewport.height(), 300.0);
        assert_relative_eq!(viewport.latitude(), 37.76);
        assert_relative_eq!(viewport.longitude(), -122.4);
        assert_relative_eq!(viewport.pitch(), 50.0);
        assert_relative_eq!(viewport.bearing(), 0.0);
        assert_relative_eq!(viewport.zoom(), 11.0);
    }

    #[test]
    fn zero_counts_as_missing() {
        let spec = ViewportSpec {
            width: Some(0.0),
            height: Some(0.0),
            zoom: Some(0.0),
            ..Default::default()
        };
        let viewport = Viewport::from_spec(Some(&spec), 200.0);

        assert_relative_eq!(viewport.width(), 200.0);
        assert_relative_eq!(viewport.height(), 500.0);
        assert_relative_eq!(viewport.zoom(), 1.0);
    }

    #[test]
    fn spec_deserializes_from_camel_case() {
        let spec: ViewportSpec =
            serde_json::from_str(r#"{"width": 100, "mapStyle": "dark-v9"}"#).unwrap();

        assert_eq!(spec.width, Some(100.0));
        assert_eq!(spec.map_style.as_deref(), Some("dark-v9"));
    }
}

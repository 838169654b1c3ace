use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::MapDeckError;

/// Supported layer kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LayerKind {
    /// Arcs between source and target positions.
    #[serde(rename = "ArcLayer")]
    Arc,
    /// Points aggregated into a grid of cells in world space.
    #[serde(rename = "GridLayer")]
    Grid,
    /// Points aggregated into hexagonal bins.
    #[serde(rename = "HexagonLayer")]
    Hexagon,
    /// Straight lines between source and target positions.
    #[serde(rename = "LineLayer")]
    Line,
    /// 3d points with normals.
    #[serde(rename = "PointCloudLayer")]
    PointCloud,
    /// Circles at the given positions.
    #[serde(rename = "ScatterplotLayer")]
    Scatterplot,
    /// Points aggregated into a grid of cells in screen space.
    #[serde(rename = "ScreenGridLayer")]
    ScreenGrid,
    /// Text labels.
    #[serde(rename = "TextLayer")]
    Text,
}

impl LayerKind {
    /// All supported kinds.
    pub const ALL: [LayerKind; 8] = [
        LayerKind::Arc,
        LayerKind::Grid,
        LayerKind::Hexagon,
        LayerKind::Line,
        LayerKind::PointCloud,
        LayerKind::Scatterplot,
        LayerKind::ScreenGrid,
        LayerKind::Text,
    ];

    /// Name of the layer kind as used in layer specs, e.g. `"ScatterplotLayer"`.
    pub fn name(&self) -> &'static str {
        match self {
            LayerKind::Arc => "ArcLayer",
            LayerKind::Grid => "GridLayer",
            LayerKind::Hexagon => "HexagonLayer",
            LayerKind::Line => "LineLayer",
            LayerKind::PointCloud => "PointCloudLayer",
            LayerKind::Scatterplot => "ScatterplotLayer",
            LayerKind::ScreenGrid => "ScreenGridLayer",
            LayerKind::Text => "TextLayer",
        }
    }
}

impl Display for LayerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayerKind {
    type Err = MapDeckError;

    /// Matching is case-insensitive: `"scatterplotlayer"` and `"SCATTERPLOTLAYER"` are both
    /// [`LayerKind::Scatterplot`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MapDeckError::UnsupportedLayerType(s.to_string()))
    }
}

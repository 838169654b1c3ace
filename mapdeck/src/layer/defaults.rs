//! Default getters used for channels the layer spec does not encode.
//!
//! Each getter reads a row through a chain of commonly used column names. For example positions
//! are taken from `longitude`/`latitude` columns, or from `lon`/`lat` if the former are missing.

use mapdeck_types::{Row, Value, ValueExt};

use super::getter::BuiltinGetter;
use super::LayerKind;
use crate::Color;

const DEFAULT_RADIUS: u64 = 100;
const DEFAULT_PIXEL_OFFSET: u64 = 0;

/// Returns the first candidate that is present and not `null`, or `null` if there is none.
pub fn fallback<'a>(candidates: impl IntoIterator<Item = Option<&'a Value>>) -> Value {
    fallback_or(candidates, Value::Null)
}

/// Returns the first candidate that is present and not `null`, or `default` if there is none.
pub fn fallback_or<'a>(
    candidates: impl IntoIterator<Item = Option<&'a Value>>,
    default: Value,
) -> Value {
    candidates
        .into_iter()
        .flatten()
        .find(|v| !v.is_null())
        .cloned()
        .unwrap_or(default)
}

fn columns<'a, const N: usize>(row: &'a Row, names: [&str; N]) -> [Option<&'a Value>; N] {
    names.map(|name| row.get(name))
}

fn position_from_lat_lon(row: &Row) -> Value {
    Value::Array(vec![
        fallback(columns(row, ["longitude", "lon"])),
        fallback(columns(row, ["latitude", "lat"])),
    ])
}

fn end_position_from_lat_lon(row: &Row) -> Value {
    Value::Array(vec![
        fallback(columns(row, ["longitude2", "lon2"])),
        fallback(columns(row, ["latitude2", "lat2"])),
    ])
}

fn position_from_xyz(row: &Row) -> Value {
    Value::Array(vec![
        fallback(columns(row, ["longitude", "lon", "positionX", "x"])),
        fallback(columns(row, ["latitude", "lat", "positionY", "y"])),
        fallback(columns(row, ["positionZ", "z"])),
    ])
}

fn normal_from_xyz(row: &Row) -> Value {
    Value::Array(
        columns(row, ["normalX", "normalY", "normalZ"])
            .map(|v| v.cloned().unwrap_or(Value::Null))
            .to_vec(),
    )
}

/// `[r, g, b, a]` from the given columns if `r`, `g` and `b` are all truthy, the default layer
/// color otherwise. Missing alpha is opaque.
fn color_from_columns(row: &Row, [r, g, b, a]: [&str; 4]) -> Value {
    let [Some(r), Some(g), Some(b)] = columns(row, [r, g, b]).map(|v| v.filter(|v| v.is_truthy()))
    else {
        return Color::DEFAULT_LAYER.into();
    };

    let a = fallback_or([row.get(a)], Value::from(Color::OPAQUE_ALPHA));
    Value::Array(vec![r.clone(), g.clone(), b.clone(), a])
}

fn color_from_rgba(row: &Row) -> Value {
    color_from_columns(row, ["colorR", "colorG", "colorB", "colorA"])
}

fn source_color_from_rgba(row: &Row) -> Value {
    color_from_columns(
        row,
        ["sourceColorR", "sourceColorG", "sourceColorB", "sourceColorA"],
    )
}

fn target_color_from_rgba(row: &Row) -> Value {
    color_from_columns(
        row,
        ["targetColorR", "targetColorG", "targetColorB", "targetColorA"],
    )
}

fn radius(row: &Row) -> Value {
    fallback_or([row.get("radius")], Value::from(DEFAULT_RADIUS))
}

fn weight(row: &Row) -> Value {
    fallback([row.get("weight")])
}

fn pixel_offset(row: &Row) -> Value {
    Value::Array(vec![
        fallback_or([row.get("pixelOffsetX")], Value::from(DEFAULT_PIXEL_OFFSET)),
        fallback_or([row.get("pixelOffsetY")], Value::from(DEFAULT_PIXEL_OFFSET)),
    ])
}

const POSITION: BuiltinGetter = BuiltinGetter::new("position_from_lat_lon", position_from_lat_lon);
const END_POSITION: BuiltinGetter =
    BuiltinGetter::new("end_position_from_lat_lon", end_position_from_lat_lon);
const POSITION_XYZ: BuiltinGetter = BuiltinGetter::new("position_from_xyz", position_from_xyz);
const NORMAL: BuiltinGetter = BuiltinGetter::new("normal_from_xyz", normal_from_xyz);
const COLOR: BuiltinGetter = BuiltinGetter::new("color_from_rgba", color_from_rgba);
const SOURCE_COLOR: BuiltinGetter =
    BuiltinGetter::new("source_color_from_rgba", source_color_from_rgba);
const TARGET_COLOR: BuiltinGetter =
    BuiltinGetter::new("target_color_from_rgba", target_color_from_rgba);
const RADIUS: BuiltinGetter = BuiltinGetter::new("radius", radius);
const WEIGHT: BuiltinGetter = BuiltinGetter::new("weight", weight);
const PIXEL_OFFSET: BuiltinGetter = BuiltinGetter::new("pixel_offset", pixel_offset);

const ARC: &[(&str, BuiltinGetter)] = &[
    ("getSourceColor", SOURCE_COLOR),
    ("getTargetColor", TARGET_COLOR),
    ("getSourcePosition", POSITION),
    ("getTargetPosition", END_POSITION),
];
const GRID: &[(&str, BuiltinGetter)] = &[("getPosition", POSITION)];
const HEXAGON: &[(&str, BuiltinGetter)] = &[("getPosition", POSITION)];
const LINE: &[(&str, BuiltinGetter)] = &[
    ("getSourcePosition", POSITION),
    ("getTargetPosition", END_POSITION),
];
const POINT_CLOUD: &[(&str, BuiltinGetter)] = &[
    ("getColor", COLOR),
    ("getPosition", POSITION_XYZ),
    ("getNormal", NORMAL),
];
const SCATTERPLOT: &[(&str, BuiltinGetter)] = &[
    ("getColor", COLOR),
    ("getPosition", POSITION),
    ("getRadius", RADIUS),
];
const SCREEN_GRID: &[(&str, BuiltinGetter)] = &[("getPosition", POSITION), ("getWeight", WEIGHT)];
const TEXT: &[(&str, BuiltinGetter)] = &[
    ("getColor", COLOR),
    ("getPixelOffset", PIXEL_OFFSET),
    ("getPosition", POSITION),
];

/// Default accessors of the layer kind with their getters.
pub fn default_getters(kind: LayerKind) -> &'static [(&'static str, BuiltinGetter)] {
    match kind {
        LayerKind::Arc => ARC,
        LayerKind::Grid => GRID,
        LayerKind::Hexagon => HEXAGON,
        LayerKind::Line => LINE,
        LayerKind::PointCloud => POINT_CLOUD,
        LayerKind::Scatterplot => SCATTERPLOT,
        LayerKind::ScreenGrid => SCREEN_GRID,
        LayerKind::Text => TEXT,
    }
}

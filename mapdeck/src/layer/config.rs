use std::collections::BTreeMap;

use mapdeck_types::{Dataset, Map, Row, TabularData, Value};
use serde::{Deserialize, Serialize};

use super::defaults::default_getters;
use super::getter::Getter;
use super::spec::LayerSpec;
use super::LayerKind;
use crate::error::MapDeckError;

/// Fully populated configuration of one layer, ready to be given to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerConfig {
    kind: LayerKind,
    data: Dataset,
    accessors: BTreeMap<String, Getter>,
    props: Map<String, Value>,
}

impl LayerConfig {
    /// Kind of the layer.
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Rows the layer draws.
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// All accessors of the layer by name.
    pub fn accessors(&self) -> &BTreeMap<String, Getter> {
        &self.accessors
    }

    /// Accessor with the given name, e.g. `"getPosition"`.
    pub fn accessor(&self, name: &str) -> Option<&Getter> {
        self.accessors.get(name)
    }

    /// Layer properties other than accessors and data, e.g. `radiusScale`.
    pub fn props(&self) -> &Map<String, Value> {
        &self.props
    }

    /// Evaluates the named accessor for the row. Returns `None` if the layer has no such accessor.
    pub fn get(&self, accessor: &str, row: &Row) -> Option<Value> {
        self.accessor(accessor).map(|getter| getter.get(row))
    }

    /// Evaluates all accessors for every row of the layer data.
    pub fn evaluate(&self) -> Vec<BTreeMap<&str, Value>> {
        self.data
            .iter()
            .map(|row| {
                self.accessors
                    .iter()
                    .map(|(name, getter)| (name.as_str(), getter.get(row)))
                    .collect()
            })
            .collect()
    }

    /// Names of the accessors the layer kind always provides.
    pub fn default_accessors(&self) -> impl Iterator<Item = &'static str> {
        default_getters(self.kind).iter().map(|(name, _)| *name)
    }
}

/// Builds a layer configuration from the data and the spec.
///
/// Properties are merged in increasing precedence: the given dataset, the default getters of the
/// layer kind, and the properties of the spec. So an accessor from the spec always wins over the
/// default one, and a `data` property in the spec replaces `data`. The spec encoding is parsed
/// first if that has not been done yet.
///
/// Fails with [`MapDeckError::UnsupportedLayerType`] if the spec type does not name one of the
/// [`LayerKind`]s.
pub fn build_layer(data: Dataset, mut spec: LayerSpec) -> Result<LayerConfig, MapDeckError> {
    spec.parse_encodings();
    let (kind_name, spec_accessors, mut props) = spec.into_parts();
    let kind: LayerKind = kind_name.parse()?;

    let data = match props.remove("data") {
        Some(value) => serde_json::from_value::<TabularData>(value)?.into_dataset()?,
        None => data,
    };

    let mut accessors: BTreeMap<String, Getter> = default_getters(kind)
        .iter()
        .map(|(name, getter)| (name.to_string(), Getter::Builtin(*getter)))
        .collect();
    accessors.extend(spec_accessors);

    log::debug!(
        "Built {kind} with {} rows and accessors {:?}",
        data.len(),
        accessors.keys().collect::<Vec<_>>()
    );

    Ok(LayerConfig {
        kind,
        data,
        accessors,
        props,
    })
}

/// One layer of a chart as sent by the data producer: tabular data and a JSON layer spec.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerEntry {
    /// Layer data.
    #[serde(default)]
    pub data: TabularData,
    /// Layer spec as a JSON string. See [`LayerSpec::from_json_str`].
    pub spec: String,
}

impl LayerEntry {
    /// Creates a new entry.
    pub fn new(data: impl Into<TabularData>, spec: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            spec: spec.into(),
        }
    }

    /// Parses the spec and builds the layer.
    pub fn build(&self) -> Result<LayerConfig, MapDeckError> {
        let data = self.data.clone().into_dataset()?;
        let spec = LayerSpec::from_json_str(&self.spec)?;
        build_layer(data, spec)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use insta::assert_compact_debug_snapshot;
    use mapdeck_types::{Column, DataFrame};
    use serde_json::json;

    use super::*;
    use crate::tests::{row, rows};

    #[test]
    fn scatterplot_with_radius_encoding() {
        let data = rows(json!([{"lat": 1, "lon": 2, "size": 50}]));
        let spec = LayerSpec::from_json_str(
            r#"{"type": "ScatterplotLayer", "encoding": {"radius": "size"}}"#,
        )
        .unwrap();

        let layer = build_layer(data, spec).unwrap();
        let first = &layer.data().rows()[0];

        assert_eq!(layer.kind(), LayerKind::Scatterplot);
        assert_eq!(layer.data().len(), 1);
        assert_eq!(layer.get("getPosition", first), Some(json!([2, 1])));
        assert_eq!(layer.get("getRadius", first), Some(json!(50)));
        assert_eq!(layer.get("getColor", first), Some(json!([200, 30, 0, 160])));
    }

    #[test]
    fn default_radius_without_encoding() {
        let layer = build_layer(rows(json!([{"lat": 1, "lon": 2}])), LayerSpec::new("scatterplotlayer"))
            .unwrap();

        assert_eq!(layer.get("getRadius", &layer.data().rows()[0]), Some(json!(100)));
    }

    #[test]
    fn every_kind_resolves_default_accessors() {
        let data = rows(json!([{
            "lat": 1, "lon": 2, "lat2": 3, "lon2": 4, "z": 5,
            "normalX": 0, "normalY": 0, "normalZ": 1, "weight": 2
        }]));

        for kind in LayerKind::ALL {
            let layer = build_layer(data.clone(), LayerSpec::new(kind.name())).unwrap();
            let row = &layer.data().rows()[0];

            for accessor in layer.default_accessors() {
                let value = layer.get(accessor, row).unwrap();
                assert!(!value.is_null(), "{kind}.{accessor} is null");
                if let Value::Array(items) = &value {
                    assert!(
                        items.iter().all(|v| !v.is_null()),
                        "{kind}.{accessor} has a null component: {value}"
                    );
                }
            }
        }
    }

    #[test]
    fn caller_accessors_override_defaults() {
        let spec = LayerSpec::new("TextLayer")
            .with_prop("getColor", json!([0, 0, 0]))
            .with_encoding("position", "coords");
        let layer = build_layer(rows(json!([{"coords": [5, 6], "lat": 1, "lon": 2}])), spec).unwrap();
        let first = &layer.data().rows()[0];

        assert_eq!(layer.get("getColor", first), Some(json!([0, 0, 0])));
        assert_eq!(layer.get("getPosition", first), Some(json!([5, 6])));
        assert_eq!(layer.get("getPixelOffset", first), Some(json!([0, 0])));
    }

    #[test]
    fn encoding_can_add_accessors_outside_the_default_set() {
        let spec = LayerSpec::new("TextLayer").with_encoding("text", "name");
        let layer = build_layer(rows(json!([{"name": "Paris"}])), spec).unwrap();

        assert_eq!(layer.get("getText", &layer.data().rows()[0]), Some(json!("Paris")));
    }

    #[test]
    fn extra_props_pass_through() {
        let spec = LayerSpec::from_json_str(
            r#"{"type": "HexagonLayer", "radius": 200, "elevationScale": 4, "extruded": true}"#,
        )
        .unwrap();
        let layer = build_layer(Dataset::default(), spec).unwrap();

        assert_eq!(
            Value::Object(layer.props().clone()),
            json!({"radius": 200, "elevationScale": 4, "extruded": true})
        );
        assert!(layer.props().get("type").is_none());
    }

    #[test]
    fn data_prop_replaces_dataset() {
        let spec = LayerSpec::new("GridLayer").with_prop("data", json!([{"lat": 7, "lon": 8}]));
        let layer = build_layer(rows(json!([{"lat": 1, "lon": 2}])), spec).unwrap();

        assert_eq!(layer.data().len(), 1);
        assert_eq!(layer.get("getPosition", &layer.data().rows()[0]), Some(json!([8, 7])));
        assert!(layer.props().get("data").is_none());
    }

    #[test]
    fn malformed_data_prop_is_rejected() {
        let spec = LayerSpec::new("GridLayer").with_prop("data", 5);
        assert_matches!(
            build_layer(Dataset::default(), spec),
            Err(MapDeckError::MalformedSpecification(_))
        );
    }

    #[test]
    fn unsupported_type() {
        let result = build_layer(Dataset::default(), LayerSpec::new("circlelayer"));
        assert_compact_debug_snapshot!(result, @r#"Err(UnsupportedLayerType("circlelayer"))"#);
    }

    #[test]
    fn evaluate_materializes_every_row() {
        let spec = LayerSpec::new("ScreenGridLayer");
        let layer = build_layer(
            rows(json!([{"lat": 1, "lon": 2, "weight": 3}, {"latitude": 4, "longitude": 5}])),
            spec,
        )
        .unwrap();

        let evaluated = layer.evaluate();

        assert_eq!(evaluated.len(), 2);
        assert_eq!(evaluated[0]["getPosition"], json!([2, 1]));
        assert_eq!(evaluated[0]["getWeight"], json!(3));
        assert_eq!(evaluated[1]["getPosition"], json!([5, 4]));
        assert_eq!(evaluated[1]["getWeight"], Value::Null);
    }

    #[test]
    fn entry_builds_from_data_frame() {
        let frame = DataFrame::new(vec![
            Column::new("lat", vec![json!(1), json!(2)]),
            Column::new("lon", vec![json!(3), json!(4)]),
        ]);
        let entry = LayerEntry::new(frame, r#"{"type": "HexagonLayer"}"#);

        let layer = entry.build().unwrap();

        assert_eq!(layer.kind(), LayerKind::Hexagon);
        assert_eq!(layer.get("getPosition", &row(json!({"lat": 9, "lon": 8}))), Some(json!([8, 9])));
        assert_eq!(layer.get("getPosition", &layer.data().rows()[1]), Some(json!([4, 2])));
    }

    #[test]
    fn entry_with_malformed_spec() {
        let entry = LayerEntry::new(Dataset::default(), "{type: ArcLayer}");
        assert_matches!(entry.build(), Err(MapDeckError::MalformedSpecification(_)));
    }
}

use std::collections::BTreeMap;

use mapdeck_types::{Map, Value};

use super::getter::{getter_name, is_getter_name, Getter};
use crate::error::MapDeckError;

/// Declarative description of one layer: its type name, optional channel encoding and any
/// additional layer properties.
///
/// Properties whose names start with `get` are accessors. They are kept separately from other
/// properties as [`Getter`]s, so that a literal like `"getRadius": 5` behaves as a constant
/// accessor.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LayerSpec {
    kind: String,
    encoding: Option<Map<String, Value>>,
    accessors: BTreeMap<String, Getter>,
    props: Map<String, Value>,
}

impl LayerSpec {
    /// Creates a spec with the given layer type name.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Parses a layer spec JSON object, e.g.
    /// `{"type": "ScatterplotLayer", "encoding": {"radius": "size"}, "opacity": 0.5}`.
    ///
    /// A missing or `null` type is kept as an empty name and is rejected later by the layer
    /// builder. A `null` encoding counts as no encoding.
    pub fn from_json_str(json: &str) -> Result<Self, MapDeckError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(fields) = value else {
            return Err(MapDeckError::MalformedSpecification(format!(
                "layer spec must be a JSON object, got: {value}"
            )));
        };

        Self::from_fields(fields)
    }

    fn from_fields(mut fields: Map<String, Value>) -> Result<Self, MapDeckError> {
        let kind = match fields.remove("type") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(kind)) => kind,
            Some(other) => {
                return Err(MapDeckError::MalformedSpecification(format!(
                    "layer type must be a string, got: {other}"
                )))
            }
        };

        let encoding = match fields.remove("encoding") {
            None | Some(Value::Null) => None,
            Some(Value::Object(encoding)) => Some(encoding),
            Some(other) => {
                return Err(MapDeckError::MalformedSpecification(format!(
                    "layer encoding must be a JSON object, got: {other}"
                )))
            }
        };

        let mut spec = Self {
            kind,
            encoding,
            ..Default::default()
        };
        for (name, value) in fields {
            spec.set_prop(name, value);
        }

        Ok(spec)
    }

    /// Adds a channel to the encoding. A string value names a column, other values are constants.
    pub fn with_encoding(mut self, channel: impl Into<String>, value: impl Into<Value>) -> Self {
        self.encoding
            .get_or_insert_with(Map::new)
            .insert(channel.into(), value.into());
        self
    }

    /// Adds a layer property. Properties named `get*` are stored as constant accessors.
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_prop(name.into(), value.into());
        self
    }

    fn set_prop(&mut self, name: String, value: Value) {
        if is_getter_name(&name) {
            self.accessors.insert(name, Getter::Constant(value));
        } else {
            self.props.insert(name, value);
        }
    }

    /// Layer type name as given by the caller.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Channel encoding, if it was not yet parsed.
    pub fn encoding(&self) -> Option<&Map<String, Value>> {
        self.encoding.as_ref()
    }

    /// Accessors set explicitly by the caller.
    pub fn accessors(&self) -> &BTreeMap<String, Getter> {
        &self.accessors
    }

    /// Layer properties other than accessors.
    pub fn props(&self) -> &Map<String, Value> {
        &self.props
    }

    /// Removes the encoding and installs a getter for each encoded channel.
    ///
    /// Each channel `foo` becomes an accessor `getFoo` (channels already named `get*` keep their
    /// name). A getter from the encoding replaces an accessor of the same name set directly in
    /// the spec. Does nothing if the spec has no encoding.
    pub fn parse_encodings(&mut self) {
        let Some(encoding) = self.encoding.take() else {
            return;
        };

        for (channel, value) in encoding {
            self.accessors
                .insert(getter_name(&channel), Getter::from_encoding(value));
        }
    }

    pub(crate) fn into_parts(self) -> (String, BTreeMap<String, Getter>, Map<String, Value>) {
        (self.kind, self.accessors, self.props)
    }
}

/// Parses encodings of the spec in place. See [`LayerSpec::parse_encodings`].
pub fn parse_encodings(spec: &mut LayerSpec) {
    spec.parse_encodings();
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_type_encoding_and_props() {
        let spec = LayerSpec::from_json_str(
            r#"{"type": "HexagonLayer", "encoding": {"radius": "size"}, "radius": 200, "extruded": true}"#,
        )
        .unwrap();

        assert_eq!(spec.kind(), "HexagonLayer");
        assert_eq!(spec.encoding(), json!({"radius": "size"}).as_object());
        assert_eq!(spec.props().get("radius"), Some(&json!(200)));
        assert_eq!(spec.props().get("extruded"), Some(&json!(true)));
        assert!(spec.accessors().is_empty());
    }

    #[test]
    fn missing_type_is_empty() {
        let spec = LayerSpec::from_json_str(r#"{"opacity": 0.1}"#).unwrap();
        assert_eq!(spec.kind(), "");
    }

    #[test]
    fn literal_accessor_props_become_constant_getters() {
        let spec = LayerSpec::from_json_str(r#"{"type": "TextLayer", "getSize": 32}"#).unwrap();

        assert_eq!(spec.accessors().get("getSize"), Some(&Getter::Constant(json!(32))));
        assert!(spec.props().get("getSize").is_none());
    }

    #[test]
    fn malformed_specs_are_rejected() {
        for json in [
            "{not json",
            "[1, 2]",
            r#"{"type": 5}"#,
            r#"{"type": "ArcLayer", "encoding": "color"}"#,
        ] {
            assert_matches!(
                LayerSpec::from_json_str(json),
                Err(MapDeckError::MalformedSpecification(_)),
                "{json}"
            );
        }
    }

    #[test]
    fn null_encoding_is_ignored() {
        let mut spec = LayerSpec::from_json_str(r#"{"type": "GridLayer", "encoding": null}"#).unwrap();
        spec.parse_encodings();

        assert!(spec.accessors().is_empty());
        assert!(spec.props().is_empty());
    }

    #[test]
    fn parse_encodings_installs_getters() {
        let mut spec = LayerSpec::new("ScatterplotLayer")
            .with_encoding("radius", "size")
            .with_encoding("getColor", json!([0, 0, 255]))
            .with_prop("opacity", 0.5);

        parse_encodings(&mut spec);

        assert!(spec.encoding().is_none());
        assert_eq!(spec.accessors().get("getRadius"), Some(&Getter::Column("size".into())));
        assert_eq!(
            spec.accessors().get("getColor"),
            Some(&Getter::Constant(json!([0, 0, 255])))
        );
        assert_eq!(spec.props().get("opacity"), Some(&json!(0.5)));
    }

    #[test]
    fn encoding_replaces_accessor_of_the_same_name() {
        let mut spec = LayerSpec::from_json_str(
            r#"{"type": "ScatterplotLayer", "getRadius": 5, "encoding": {"radius": "size"}}"#,
        )
        .unwrap();
        spec.parse_encodings();

        assert_eq!(spec.accessors().get("getRadius"), Some(&Getter::Column("size".into())));
    }

    #[test]
    fn parse_encodings_without_encoding_does_nothing() {
        let mut spec = LayerSpec::new("LineLayer").with_prop("strokeWidth", 3);
        let before = spec.clone();

        spec.parse_encodings();

        assert_eq!(spec, before);
    }
}

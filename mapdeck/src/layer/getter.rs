use std::fmt::{Debug, Formatter};

use mapdeck_types::{Row, Value};

const GETTER_PREFIX: &str = "get";

/// Per-row function producing the value of one visual channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Getter {
    /// Reads the named column of the row. Missing columns produce `null`.
    Column(String),
    /// Returns the same value for every row.
    Constant(Value),
    /// One of the default getters of a layer kind.
    Builtin(BuiltinGetter),
}

impl Getter {
    /// Creates a getter from an encoding value: a string names a column to read, any other value
    /// is a constant.
    pub fn from_encoding(value: Value) -> Self {
        match value {
            Value::String(column) => Getter::Column(column),
            value => Getter::Constant(value),
        }
    }

    /// Evaluates the getter for the row.
    pub fn get(&self, row: &Row) -> Value {
        match self {
            Getter::Column(column) => row.get(column).cloned().unwrap_or(Value::Null),
            Getter::Constant(value) => value.clone(),
            Getter::Builtin(builtin) => builtin.get(row),
        }
    }
}

/// Named getter function from the default getter table.
#[derive(Clone, Copy)]
pub struct BuiltinGetter {
    name: &'static str,
    get: fn(&Row) -> Value,
}

impl BuiltinGetter {
    pub(crate) const fn new(name: &'static str, get: fn(&Row) -> Value) -> Self {
        Self { name, get }
    }

    /// Name of the getter, e.g. `"position_from_lat_lon"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluates the getter for the row.
    pub fn get(&self, row: &Row) -> Value {
        (self.get)(row)
    }
}

impl PartialEq for BuiltinGetter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Debug for BuiltinGetter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BuiltinGetter({})", self.name)
    }
}

/// Converts a channel name into its accessor name: `color` becomes `getColor`. Names that already
/// start with `get` are returned unchanged.
pub fn getter_name(channel: &str) -> String {
    if channel.starts_with(GETTER_PREFIX) {
        return channel.to_string();
    }

    let mut chars = channel.chars();
    match chars.next() {
        Some(first) => format!("{GETTER_PREFIX}{}{}", first.to_uppercase(), chars.as_str()),
        None => GETTER_PREFIX.to_string(),
    }
}

/// Returns true if the property name is an accessor name.
pub(crate) fn is_getter_name(name: &str) -> bool {
    name.starts_with(GETTER_PREFIX)
}

use serde_json::Value;

/// Helper methods for scalar cell values.
pub trait ValueExt {
    /// Returns `false` for `null`, `false`, zero, and the empty string. All other values
    /// (including empty arrays and objects) are truthy.
    fn is_truthy(&self) -> bool;
}

impl ValueExt for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(v) => *v,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl ValueExt for Option<&Value> {
    fn is_truthy(&self) -> bool {
        self.is_some_and(|v| v.is_truthy())
    }
}

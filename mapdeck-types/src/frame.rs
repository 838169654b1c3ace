use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MapDeckTypesError;
use crate::{Dataset, Row};

/// A named column of a [`DataFrame`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Cell values, one per row.
    pub values: Vec<Value>,
}

impl Column {
    /// Creates a new column.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Columnar tabular data.
///
/// ```
/// use mapdeck_types::{Column, DataFrame};
/// use serde_json::json;
///
/// let frame = DataFrame::new(vec![
///     Column::new("lat", vec![json!(1.0), json!(2.0)]),
///     Column::new("lon", vec![json!(3.0), json!(4.0)]),
/// ]);
///
/// let dataset = frame.into_dataset()?;
/// assert_eq!(dataset.rows()[1].get("lon"), Some(&json!(4.0)));
/// # Ok::<(), mapdeck_types::error::MapDeckTypesError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    /// Columns of the frame. All columns must have the same length.
    pub columns: Vec<Column>,
}

impl DataFrame {
    /// Creates a frame from columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Number of rows in the frame, taken from the first column.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    /// Transposes the frame into a row-oriented dataset.
    ///
    /// Fails if the columns are not all of the same length.
    pub fn into_dataset(self) -> Result<Dataset, MapDeckTypesError> {
        let expected = self.row_count();
        if let Some(column) = self.columns.iter().find(|c| c.values.len() != expected) {
            return Err(MapDeckTypesError::Shape {
                column: column.name.clone(),
                expected,
                actual: column.values.len(),
            });
        }

        let mut rows = vec![Row::new(); expected];
        for Column { name, values } in self.columns {
            for (row, value) in rows.iter_mut().zip(values) {
                row.insert(name.clone(), value);
            }
        }

        Ok(Dataset::new(rows))
    }
}

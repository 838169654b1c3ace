use serde::{Deserialize, Serialize};

use crate::error::MapDeckTypesError;
use crate::{DataFrame, Row};

/// Ordered sequence of rows used as layer data.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(Vec<Row>);

impl Dataset {
    /// Creates a dataset from the given rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self(rows)
    }

    /// Parses a JSON array of row objects.
    pub fn from_json_str(json: &str) -> Result<Self, MapDeckTypesError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a CSV document with a header line.
    ///
    /// Cells that parse as numbers become numbers, `true` and `false` become booleans, empty cells
    /// are left out of the row, and everything else is kept as a string.
    #[cfg(feature = "csv")]
    pub fn from_csv_reader(reader: impl std::io::Read) -> Result<Self, MapDeckTypesError> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.clone();

        let mut rows = vec![];
        for record in reader.records() {
            let record = record?;
            let row: Row = headers
                .iter()
                .zip(record.iter())
                .filter(|(_, cell)| !cell.is_empty())
                .map(|(name, cell)| (name, csv_cell(cell)))
                .collect();
            rows.push(row);
        }

        Ok(Self(rows))
    }

    /// Rows of the dataset.
    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &Row> + '_ {
        self.0.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(value: Vec<Row>) -> Self {
        Self(value)
    }
}

impl FromIterator<Row> for Dataset {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(feature = "csv")]
fn csv_cell(cell: &str) -> serde_json::Value {
    use serde_json::{Number, Value};

    if let Ok(v) = cell.parse::<i64>() {
        return Value::from(v);
    }
    if let Some(v) = cell.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(v);
    }
    match cell {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(cell.to_string()),
    }
}

/// Layer data as it arrives from the producer: either row objects or a columnar frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TabularData {
    /// Array of row objects.
    Rows(Dataset),
    /// Columnar data frame.
    Frame(DataFrame),
}

impl TabularData {
    /// Converts the data into row-oriented form.
    pub fn into_dataset(self) -> Result<Dataset, MapDeckTypesError> {
        match self {
            TabularData::Rows(dataset) => Ok(dataset),
            TabularData::Frame(frame) => frame.into_dataset(),
        }
    }
}

impl Default for TabularData {
    fn default() -> Self {
        Self::Rows(Dataset::default())
    }
}

impl From<Dataset> for TabularData {
    fn from(value: Dataset) -> Self {
        Self::Rows(value)
    }
}

impl From<DataFrame> for TabularData {
    fn from(value: DataFrame) -> Self {
        Self::Frame(value)
    }
}

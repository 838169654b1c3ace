//! Tabular data model used by `mapdeck` layers.
//!
//! Layer data is a [`Dataset`], an ordered list of [`Row`]s. A row maps column names to scalar
//! JSON [`Value`]s and does not enforce any schema: channel getters only look columns up by name.
//! Columnar input can be converted into a dataset through [`DataFrame`].

pub mod error;

mod dataset;
mod frame;
mod row;
mod value;

pub use dataset::{Dataset, TabularData};
pub use frame::{Column, DataFrame};
pub use row::Row;
pub use value::ValueExt;

pub use serde_json::{Map, Value};

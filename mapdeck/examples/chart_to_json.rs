//! This example builds a chart with one layer from a CSV file and prints the resulting scene as
//! JSON.
//!
//! Run it with the path to a CSV file and a layer spec:
//!
//! ```shell
//! cargo run --example chart_to_json -- cities.csv '{"type": "ScatterplotLayer", "encoding": {"radius": "population"}}'
//! ```
//!
//! The chart spec can be given as the optional third argument.

use std::fs::File;

use anyhow::{anyhow, Result};
use mapdeck::render::JsonRenderer;
use mapdeck::{ChartOutput, MapChartBuilder};
use mapdeck_types::Dataset;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (csv_path, layer_spec) = match args.as_slice() {
        [csv_path, layer_spec, ..] => (csv_path, layer_spec),
        _ => {
            return Err(anyhow!(
                "This example must be run with two arguments - a .csv file and a layer spec"
            ))
        }
    };

    let data = Dataset::from_csv_reader(File::open(csv_path)?)?;
    log::info!("Loaded {} rows from {csv_path}", data.len());

    let mut builder = MapChartBuilder::new(800.0)
        .with_layer(data, layer_spec.as_str())
        .with_access_token_from_env();
    if let Some(chart_spec) = args.get(2) {
        builder = builder.with_spec(chart_spec.as_str());
    }
    let chart = builder.build();

    let mut renderer = JsonRenderer::new();
    match chart.render(&mut renderer) {
        ChartOutput::Rendered { .. } => {
            let scene = renderer
                .take_scene()
                .ok_or_else(|| anyhow!("renderer produced no scene"))?;
            println!("{}", serde_json::to_string_pretty(&scene)?);
            Ok(())
        }
        ChartOutput::Error(notice) => Err(anyhow!("{notice}")),
    }
}

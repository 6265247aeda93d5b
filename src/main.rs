use anyhow::Result;
use clap::Parser;

use model_zoo::{
    get_shape, init_logging, load_config, Flags, InferenceRunner, LinearModel, RunConfig, Tensor,
};

fn main() -> Result<()> {
    init_logging();

    let flags = Flags::parse();
    let config = load_config(&flags)?;

    // Small fixed batch so the binary demonstrates a full session out of
    // the box; real callers supply their own data source and model.
    let runner = InferenceRunner::new(
        config,
        || Tensor::from_vec(&[2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        |config: &RunConfig| LinearModel::from_config(config),
    );

    let predictions = runner.run()?;

    println!("predictions {:?}:", get_shape(&predictions));
    for row in predictions.as_slice().chunks(predictions.shape()[1]) {
        println!("  {:?}", row);
    }

    Ok(())
}

pub mod distance;
pub mod resolve;
pub mod server;
pub mod zones;

use crate::{Error, Result};

fn parse_f64(args: &[String], index: usize, name: &str) -> Result<f64> {
    let arg = args
        .get(index)
        .ok_or(Error::CLI(format!("Missing argument: {name}")))?;
    arg.parse::<f64>()
        .map_err(|_| Error::CLI(format!("{name} should be a number, got {arg}")))
}

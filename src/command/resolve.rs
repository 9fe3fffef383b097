use super::parse_f64;
use crate::conf::Conf;
use crate::resolver::{Resolution, Resolver};
use crate::zone::Jurisdiction;
use crate::{geometry, zone, Error, Result};
use std::str::FromStr;

pub fn run(args: &[String], conf: &Conf) -> Result<()> {
    let resolution = resolve(args, conf)?;
    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(())
}

fn resolve(args: &[String], conf: &Conf) -> Result<Resolution> {
    let lat = parse_f64(args, 0, "lat")?;
    let lon = parse_f64(args, 1, "lon")?;
    let suggested = match args.get(2) {
        Some(arg) => Some(
            Jurisdiction::from_str(arg)
                .map_err(|_| Error::CLI(format!("Unknown jurisdiction: {arg}")))?,
        ),
        None => None,
    };
    geometry::validate_coord(lat, lon)?;
    let resolver = Resolver::new(zone::loader::load(conf)?);
    Ok(resolver.resolve_with_suggestion(lat, lon, suggested))
}

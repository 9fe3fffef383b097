use super::parse_f64;
use crate::{geometry, Result};

pub fn run(args: &[String]) -> Result<()> {
    println!("{:.3} km", distance(args)?);
    Ok(())
}

fn distance(args: &[String]) -> Result<f64> {
    let lat1 = parse_f64(args, 0, "lat1")?;
    let lon1 = parse_f64(args, 1, "lon1")?;
    let lat2 = parse_f64(args, 2, "lat2")?;
    let lon2 = parse_f64(args, 3, "lon2")?;
    geometry::validate_coord(lat1, lon1)?;
    geometry::validate_coord(lat2, lon2)?;
    Ok(geometry::distance_km(lat1, lon1, lat2, lon2))
}

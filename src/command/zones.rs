use crate::conf::Conf;
use crate::{zone, Result};

/// Validates zone definitions and prints a short summary of each zone
pub fn run(conf: &Conf) -> Result<()> {
    let zones = zone::loader::load(conf)?;
    for (index, zone) in zones.iter().enumerate() {
        println!(
            "{index}\t{}\t{}\t{}\t{} vertices",
            zone.jurisdiction,
            zone.ward_id.as_deref().unwrap_or("-"),
            zone.name(),
            zone.polygon.exterior().0.len(),
        );
    }
    println!("{} zones OK", zones.len());
    Ok(())
}

use super::{BoundaryZone, Jurisdiction};
use crate::{conf::Conf, zone::data, Error, Result};
use geo::{Coord, LineString, Polygon};
use geojson::{Feature, GeoJson};
use serde_json::Value;
use std::{collections::HashSet, fs, path::Path, str::FromStr, time::Instant};
use tracing::{info, warn};

/// Loads zones from the configured file or falls back to the bundled data.
///
/// Any problem with the definitions is fatal, the caller isn't expected to
/// recover from it.
pub fn load(conf: &Conf) -> Result<Vec<BoundaryZone>> {
    match &conf.zones_file {
        Some(path) => load_file(path),
        None => {
            info!(file = data::BUNDLED_FILE_NAME, "Loading bundled zones");
            parse(data::bundled()?)
        }
    }
}

pub fn load_file(path: &Path) -> Result<Vec<BoundaryZone>> {
    info!(path = %path.display(), "Loading zones");
    let geo_json = fs::read_to_string(path)?;
    parse(&geo_json)
}

pub fn parse(geo_json: &str) -> Result<Vec<BoundaryZone>> {
    let started_at = Instant::now();
    let geo_json: GeoJson = geo_json.parse()?;
    let collection = match geo_json {
        GeoJson::FeatureCollection(collection) => collection,
        _ => Err(Error::InvalidInput(
            "Zone definitions should be a FeatureCollection".into(),
        ))?,
    };
    if collection.features.is_empty() {
        Err(Error::InvalidInput(
            "Zone definitions contain no zones".into(),
        ))?
    }
    let zones = collection
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| parse_feature(index, feature))
        .collect::<Result<Vec<_>>>()?;
    warn_on_duplicate_wards(&zones);
    let time_ms = started_at.elapsed().as_millis();
    info!(
        count = zones.len(),
        time_ms,
        "Loaded {} zones in {} ms",
        zones.len(),
        time_ms,
    );
    Ok(zones)
}

fn parse_feature(index: usize, feature: &Feature) -> Result<BoundaryZone> {
    let invalid = |reason: String| Error::InvalidZone { index, reason };

    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| invalid("geometry is missing".into()))?;
    let rings = match &geometry.value {
        geojson::Value::Polygon(rings) => rings,
        _ => Err(invalid("geometry should be a Polygon".into()))?,
    };
    // only the exterior ring takes part in lookups
    let exterior = rings
        .first()
        .ok_or_else(|| invalid("polygon has no rings".into()))?;
    let mut coords: Vec<Coord> = Vec::with_capacity(exterior.len());
    for position in exterior {
        match position.as_slice() {
            [lon, lat, ..] => coords.push(Coord { x: *lon, y: *lat }),
            _ => Err(invalid("position should have at least 2 elements".into()))?,
        }
    }
    let distinct = distinct_vertices(&coords);
    if distinct < 3 {
        Err(invalid(format!(
            "polygon should have at least 3 distinct vertices, got {distinct}"
        )))?
    }

    let jurisdiction = feature
        .property("jurisdiction")
        .ok_or_else(|| invalid("jurisdiction is missing".into()))?
        .as_str()
        .ok_or_else(|| invalid("jurisdiction should be a string".into()))?;
    let jurisdiction = Jurisdiction::from_str(jurisdiction)
        .map_err(|_| invalid(format!("unknown jurisdiction: {jurisdiction}")))?;
    if jurisdiction == Jurisdiction::Unknown {
        Err(invalid(format!(
            "{jurisdiction} can't be assigned to a zone"
        )))?
    }

    let ward_id = optional_string(feature, "wardId").map_err(invalid)?;
    let name = optional_string(feature, "name").map_err(invalid)?;

    Ok(BoundaryZone::new(
        jurisdiction,
        ward_id,
        name,
        Polygon::new(LineString::new(coords), vec![]),
    ))
}

fn distinct_vertices(coords: &[Coord]) -> usize {
    // adding 0.0 folds -0.0 into 0.0 so both hash the same
    coords
        .iter()
        .map(|it| ((it.x + 0.0).to_bits(), (it.y + 0.0).to_bits()))
        .collect::<HashSet<_>>()
        .len()
}

fn optional_string(feature: &Feature, key: &str) -> std::result::Result<Option<String>, String> {
    match feature.property(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(format!("{key} should be a string")),
    }
}

fn warn_on_duplicate_wards(zones: &[BoundaryZone]) {
    for (i, zone) in zones.iter().enumerate() {
        let Some(ward_id) = &zone.ward_id else {
            continue;
        };
        if zones[..i]
            .iter()
            .any(|it| it.ward_id.as_ref() == Some(ward_id))
        {
            warn!(
                ward_id = ward_id.as_str(),
                index = i,
                "Ward id is used by more than one zone"
            );
        }
    }
}

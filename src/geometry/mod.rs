mod haversine;
mod ray_casting;

pub use haversine::distance_km;
pub use ray_casting::point_in_polygon;

/// Latitude must be a finite number within [-90, 90], longitude within [-180, 180].
///
/// Geometry functions never call this themselves, garbage in is garbage out there.
/// Callers facing the outside world are expected to check their input first.
pub fn validate_coord(lat: f64, lon: f64) -> crate::Result<()> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(crate::Error::InvalidInput(format!(
            "Latitude should be within [-90, 90], got {lat}"
        )));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(crate::Error::InvalidInput(format!(
            "Longitude should be within [-180, 180], got {lon}"
        )));
    }
    Ok(())
}

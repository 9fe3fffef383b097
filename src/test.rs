use crate::resolver::Resolver;
use crate::zone::{BoundaryZone, Jurisdiction};
use geo::{LineString, Polygon};

/// Axis-aligned rectangle zone, bounds are (west, south, east, north)
pub fn mock_zone(jurisdiction: Jurisdiction, bounds: (f64, f64, f64, f64)) -> BoundaryZone {
    let (w, s, e, n) = bounds;
    BoundaryZone::new(
        jurisdiction,
        None,
        None,
        Polygon::new(
            LineString::from(vec![(w, s), (e, s), (e, n), (w, n), (w, s)]),
            vec![],
        ),
    )
}

/// Bounding rectangle around Belagavi
pub fn mock_bcc_zone() -> BoundaryZone {
    BoundaryZone {
        ward_id: Some("BCC-W01".into()),
        name: Some("Belagavi City".into()),
        ..mock_zone(Jurisdiction::Bcc, (74.42, 15.78, 74.56, 15.92))
    }
}

pub fn mock_resolver() -> Resolver {
    Resolver::new(vec![
        BoundaryZone {
            name: Some("Belgaum Cantonment".into()),
            ..mock_zone(Jurisdiction::Cantonment, (74.500, 15.845, 74.515, 15.862))
        },
        mock_bcc_zone(),
    ])
}

use crate::zone::{BoundaryZone, Jurisdiction};
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::debug;

/// Where a resolved jurisdiction came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Source {
    /// One of the registered zones contains the point
    Zone,
    /// No zone matched, an externally suggested jurisdiction was used
    Suggestion,
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub jurisdiction: Jurisdiction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_name: Option<String>,
    pub source: Source,
}

impl Resolution {
    pub fn default_jurisdiction() -> Self {
        Resolution {
            jurisdiction: Jurisdiction::DEFAULT,
            ward_id: None,
            area_name: None,
            source: Source::Default,
        }
    }

    fn from_zone(zone: &BoundaryZone) -> Self {
        Resolution {
            jurisdiction: zone.jurisdiction,
            ward_id: zone.ward_id.clone(),
            area_name: zone.name.clone(),
            source: Source::Zone,
        }
    }
}

/// Maps coordinates to jurisdictions.
///
/// Zones are checked in the order they were registered and the first one containing
/// the point wins, so overlapping definitions stay deterministic. Points outside of
/// every zone resolve to [`Jurisdiction::DEFAULT`].
///
/// The zone list never changes after construction, which makes a single instance safe
/// to share between any number of threads.
#[derive(Debug, Clone)]
pub struct Resolver {
    zones: Vec<BoundaryZone>,
}

impl Resolver {
    /// An empty zone list is accepted, every lookup will fall back to the default
    pub fn new(zones: Vec<BoundaryZone>) -> Self {
        Resolver { zones }
    }

    pub fn zones(&self) -> &[BoundaryZone] {
        &self.zones
    }

    pub fn find_zone(&self, lat: f64, lon: f64) -> Option<&BoundaryZone> {
        self.zones.iter().find(|zone| zone.contains(lat, lon))
    }

    /// Coordinates aren't validated here. Garbage such as NaN or out of range degrees
    /// simply misses every zone and ends up with the default.
    pub fn resolve(&self, lat: f64, lon: f64) -> Resolution {
        match self.find_zone(lat, lon) {
            Some(zone) => {
                debug!(
                    lat,
                    lon,
                    jurisdiction = %zone.jurisdiction,
                    zone = zone.name(),
                    "Point matched a zone",
                );
                Resolution::from_zone(zone)
            }
            None => {
                debug!(lat, lon, "No zone matched, using default");
                Resolution::default_jurisdiction()
            }
        }
    }

    /// Combines geometry with an externally suggested jurisdiction, such as the one
    /// returned by an image classifier.
    ///
    /// A containing zone always wins. The suggestion is only used for points outside of
    /// every zone, and only if it names an actual authority.
    pub fn resolve_with_suggestion(
        &self,
        lat: f64,
        lon: f64,
        suggested: Option<Jurisdiction>,
    ) -> Resolution {
        let resolution = self.resolve(lat, lon);
        if resolution.source == Source::Zone {
            return resolution;
        }
        match suggested {
            Some(suggested) if suggested != Jurisdiction::Unknown => Resolution {
                jurisdiction: suggested,
                ward_id: None,
                area_name: None,
                source: Source::Suggestion,
            },
            _ => resolution,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Resolution, Resolver, Source};
    use crate::test::{mock_bcc_zone, mock_zone};
    use crate::zone::{loader, Jurisdiction};
    use std::sync::Arc;

    #[test]
    fn serialized_shape() {
        let json = serde_json::to_value(Resolution::default_jurisdiction()).unwrap();
        assert_eq!(serde_json::json!({ "jurisdiction": "BCC", "source": "DEFAULT" }), json);
        let resolution = Resolver::new(vec![mock_bcc_zone()]).resolve(15.85, 74.49);
        let json = serde_json::to_value(resolution).unwrap();
        assert_eq!("BCC-W01", json["ward_id"]);
        assert_eq!("ZONE", json["source"]);
    }

    #[test]
    fn point_inside_single_zone() {
        let resolver = Resolver::new(vec![mock_bcc_zone()]);
        let res = resolver.resolve(15.85, 74.49);
        assert_eq!(Jurisdiction::Bcc, res.jurisdiction);
        assert_eq!(Some("BCC-W01".to_string()), res.ward_id);
        assert_eq!(Some("Belagavi City".to_string()), res.area_name);
        assert_eq!(Source::Zone, res.source);
    }

    #[test]
    fn point_outside_every_zone() {
        let resolver = Resolver::new(vec![
            mock_bcc_zone(),
            mock_zone(Jurisdiction::Vtu, (74.462, 15.787, 74.478, 15.803)),
        ]);
        let res = resolver.resolve(16.50, 74.49);
        assert_eq!(Resolution::default_jurisdiction(), res);
        assert_eq!(Jurisdiction::Bcc, res.jurisdiction);
        assert_eq!(None, res.ward_id);
        assert_eq!(None, res.area_name);
        assert_eq!(Source::Default, res.source);
    }

    #[test]
    fn non_default_zone() {
        let resolver = Resolver::new(vec![mock_zone(
            Jurisdiction::Cantonment,
            (74.500, 15.845, 74.515, 15.862),
        )]);
        let res = resolver.resolve(15.8520, 74.5050);
        assert_eq!(Jurisdiction::Cantonment, res.jurisdiction);
        assert_eq!(Source::Zone, res.source);
    }

    #[test]
    fn overlapping_zones_first_wins() {
        let cantonment = mock_zone(Jurisdiction::Cantonment, (74.48, 15.84, 74.52, 15.86));
        let resolver = Resolver::new(vec![cantonment.clone(), mock_bcc_zone()]);
        assert_eq!(
            Jurisdiction::Cantonment,
            resolver.resolve(15.85, 74.50).jurisdiction
        );
        let resolver = Resolver::new(vec![mock_bcc_zone(), cantonment]);
        assert_eq!(Jurisdiction::Bcc, resolver.resolve(15.85, 74.50).jurisdiction);
    }

    #[test]
    fn no_zones() {
        let resolver = Resolver::new(vec![]);
        assert_eq!(
            Resolution::default_jurisdiction(),
            resolver.resolve(15.85, 74.49)
        );
    }

    #[test]
    fn garbage_coordinates() {
        let resolver = Resolver::new(vec![mock_bcc_zone()]);
        for (lat, lon) in [
            (f64::NAN, 74.49),
            (15.85, f64::NAN),
            (f64::NAN, f64::NAN),
            (1000.0, -1000.0),
        ] {
            assert_eq!(
                Resolution::default_jurisdiction(),
                resolver.resolve(lat, lon)
            );
        }
    }

    #[test]
    fn suggestion_does_not_override_zone() {
        let resolver = Resolver::new(vec![mock_bcc_zone()]);
        let res = resolver.resolve_with_suggestion(15.85, 74.49, Some(Jurisdiction::Pwd));
        assert_eq!(Jurisdiction::Bcc, res.jurisdiction);
        assert_eq!(Source::Zone, res.source);
    }

    #[test]
    fn suggestion_used_outside_zones() {
        let resolver = Resolver::new(vec![mock_bcc_zone()]);
        let res = resolver.resolve_with_suggestion(16.50, 74.49, Some(Jurisdiction::Pwd));
        assert_eq!(Jurisdiction::Pwd, res.jurisdiction);
        assert_eq!(None, res.ward_id);
        assert_eq!(Source::Suggestion, res.source);
    }

    #[test]
    fn unknown_suggestion_is_ignored() {
        let resolver = Resolver::new(vec![mock_bcc_zone()]);
        assert_eq!(
            Resolution::default_jurisdiction(),
            resolver.resolve_with_suggestion(16.50, 74.49, Some(Jurisdiction::Unknown))
        );
        assert_eq!(
            Resolution::default_jurisdiction(),
            resolver.resolve_with_suggestion(16.50, 74.49, None)
        );
    }

    #[test]
    fn bundled_zones() {
        let zones = loader::parse(crate::zone::data::bundled().unwrap()).unwrap();
        let resolver = Resolver::new(zones);
        // Camp area
        assert_eq!(
            Jurisdiction::Cantonment,
            resolver.resolve(15.8520, 74.5050).jurisdiction
        );
        // VTU campus, Machhe
        assert_eq!(
            Jurisdiction::Vtu,
            resolver.resolve(15.7950, 74.4700).jurisdiction
        );
        // Tilakwadi
        let res = resolver.resolve(15.8650, 74.4850);
        assert_eq!(Jurisdiction::Bcc, res.jurisdiction);
        assert_eq!(Some("BCC-W01".to_string()), res.ward_id);
        assert_eq!(Source::Zone, res.source);
        assert_eq!(Jurisdiction::Bcc, resolver.resolve(15.85, 74.49).jurisdiction);
        // far north, outside of Belagavi
        assert_eq!(Source::Default, resolver.resolve(16.50, 74.49).source);
    }

    #[test]
    fn shared_between_threads() {
        let resolver = Arc::new(Resolver::new(vec![
            mock_zone(Jurisdiction::Cantonment, (74.500, 15.845, 74.515, 15.862)),
            mock_bcc_zone(),
        ]));
        std::thread::scope(|scope| {
            for _ in 0..8 {
                let resolver = resolver.clone();
                scope.spawn(move || {
                    for _ in 0..100 {
                        assert_eq!(
                            Jurisdiction::Cantonment,
                            resolver.resolve(15.8520, 74.5050).jurisdiction
                        );
                        assert_eq!(
                            Jurisdiction::Bcc,
                            resolver.resolve(15.85, 74.45).jurisdiction
                        );
                    }
                });
            }
        });
    }
}

use crate::geometry;
use geo::{BoundingRect, Coord, Polygon, Rect};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Administrative authority responsible for a place
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Jurisdiction {
    /// Belagavi City Corporation
    Bcc,
    /// Belgaum Cantonment Board
    Cantonment,
    /// Visvesvaraya Technological University
    Vtu,
    /// Public Works Department
    Pwd,
    Unknown,
}

impl Jurisdiction {
    /// Returned for any point which isn't covered by a registered zone
    pub const DEFAULT: Jurisdiction = Jurisdiction::Bcc;

    pub fn label(&self) -> &'static str {
        match self {
            Jurisdiction::Bcc => "Belagavi City Corporation",
            Jurisdiction::Cantonment => "Cantonment Board",
            Jurisdiction::Vtu => "VTU Campus",
            Jurisdiction::Pwd => "Public Works Dept.",
            Jurisdiction::Unknown => "Unknown",
        }
    }
}

/// Named administrative boundary, immutable once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryZone {
    pub jurisdiction: Jurisdiction,
    pub ward_id: Option<String>,
    pub name: Option<String>,
    /// x is longitude, y is latitude
    pub polygon: Polygon,
}

impl BoundaryZone {
    pub fn new(
        jurisdiction: Jurisdiction,
        ward_id: Option<String>,
        name: Option<String>,
        polygon: Polygon,
    ) -> Self {
        BoundaryZone {
            jurisdiction,
            ward_id,
            name,
            polygon,
        }
    }

    /// Only the exterior ring is checked, holes are ignored
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        geometry::point_in_polygon(Coord { x: lon, y: lat }, &self.polygon.exterior().0)
    }

    pub fn bounding_rect(&self) -> Option<Rect> {
        self.polygon.bounding_rect()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }
}

use crate::log::RequestExtension;
use crate::resolver::Resolver;
use crate::rest::error::RestResult as Res;
use crate::zone::BoundaryZone;
use actix_web::get;
use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::HttpMessage;
use actix_web::HttpRequest;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde_json::Value;

/// Loaded zones in the same shape they were defined in, plus bounding boxes
#[get("")]
pub async fn get(req: HttpRequest, resolver: Data<Resolver>) -> Res<FeatureCollection> {
    req.extensions_mut()
        .insert(RequestExtension::new(resolver.zones().len()));
    Ok(Json(to_feature_collection(resolver.zones())))
}

pub fn to_feature_collection(zones: &[BoundaryZone]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: zones.iter().map(to_feature).collect(),
        foreign_members: None,
    }
}

fn to_feature(zone: &BoundaryZone) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(
        "jurisdiction".into(),
        Value::String(zone.jurisdiction.to_string()),
    );
    if let Some(ward_id) = &zone.ward_id {
        properties.insert("wardId".into(), Value::String(ward_id.clone()));
    }
    if let Some(name) = &zone.name {
        properties.insert("name".into(), Value::String(name.clone()));
    }
    Feature {
        bbox: zone
            .bounding_rect()
            .map(|it| vec![it.min().x, it.min().y, it.max().x, it.max().y]),
        geometry: Some(Geometry::new(geojson::Value::from(&zone.polygon))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

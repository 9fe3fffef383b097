use crate::geometry;
use crate::resolver::{Resolution, Resolver, Source};
use crate::rest::error::RestResult as Res;
use crate::zone::Jurisdiction;
use actix_web::get;
use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::web::Query;
use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize)]
pub struct GetArgs {
    lat: f64,
    lon: f64,
    suggested: Option<Jurisdiction>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct GetItem {
    pub jurisdiction: Jurisdiction,
    pub jurisdiction_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_name: Option<String>,
    pub source: Source,
}

impl From<Resolution> for GetItem {
    fn from(val: Resolution) -> Self {
        GetItem {
            jurisdiction: val.jurisdiction,
            jurisdiction_label: val.jurisdiction.label().into(),
            ward_id: val.ward_id,
            area_name: val.area_name,
            source: val.source,
        }
    }
}

#[get("")]
pub async fn get(args: Query<GetArgs>, resolver: Data<Resolver>) -> Res<GetItem> {
    geometry::validate_coord(args.lat, args.lon)?;
    let resolution = resolver.resolve_with_suggestion(args.lat, args.lon, args.suggested);
    Ok(Json(resolution.into()))
}

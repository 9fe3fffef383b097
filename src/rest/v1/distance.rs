use crate::geometry;
use crate::rest::error::RestResult as Res;
use actix_web::get;
use actix_web::web::Json;
use actix_web::web::Query;
use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize)]
pub struct GetArgs {
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct GetItem {
    pub distance_km: f64,
}

#[get("")]
pub async fn get(args: Query<GetArgs>) -> Res<GetItem> {
    geometry::validate_coord(args.lat1, args.lon1)?;
    geometry::validate_coord(args.lat2, args.lon2)?;
    Ok(Json(GetItem {
        distance_km: geometry::distance_km(args.lat1, args.lon1, args.lat2, args.lon2),
    }))
}

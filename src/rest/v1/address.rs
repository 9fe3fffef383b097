use crate::conf::Conf;
use crate::geometry;
use crate::osm::nominatim;
use crate::rest::error::RestResult as Res;
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
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct GetItem {
    pub address: String,
}

#[get("")]
pub async fn get(
    args: Query<GetArgs>,
    client: Data<reqwest::Client>,
    conf: Data<Conf>,
) -> Res<GetItem> {
    geometry::validate_coord(args.lat, args.lon)?;
    let address = nominatim::address_or_fallback(&client, &conf, args.lat, args.lon).await;
    Ok(Json(GetItem { address }))
}

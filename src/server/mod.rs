use crate::conf::Conf;
use crate::resolver::Resolver;
use crate::{error, log, rest, Result};
use actix_web::middleware::from_fn;
use actix_web::web;
use actix_web::web::scope;
use actix_web::web::QueryConfig;
use actix_web::{
    middleware::{Compress, NormalizePath},
    web::Data,
    App, HttpServer,
};
use tracing::info;

/// Zones have to be loaded before calling this, the resolver is shared by all the workers
/// and never changes afterwards
pub async fn run(conf: Conf, resolver: Resolver) -> Result<()> {
    let resolver = Data::new(resolver);
    let client = Data::new(reqwest::Client::new());
    let bind_addr = conf.bind_addr.clone();
    let port = conf.port;
    let conf = Data::new(conf);

    info!(
        bind_addr,
        port,
        zones = resolver.zones().len(),
        "Starting HTTP server",
    );

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(log::middleware::handle_request))
            .wrap(NormalizePath::trim())
            .wrap(Compress::default())
            .app_data(resolver.clone())
            .app_data(client.clone())
            .app_data(conf.clone())
            .app_data(QueryConfig::default().error_handler(error::query_error_handler))
            .service(
                scope("v1")
                    .service(scope("jurisdiction").service(rest::v1::jurisdiction::get))
                    .service(scope("distance").service(rest::v1::distance::get))
                    .service(scope("zones").service(rest::v1::zones::get))
                    .service(scope("address").service(rest::v1::address::get)),
            )
            .default_service(web::to(rest::error::default_service))
    })
    .bind((bind_addr.as_str(), port))?
    .run()
    .await?;

    Ok(())
}

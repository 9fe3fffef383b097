use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    Error, HttpMessage,
};
use time::OffsetDateTime;
use tracing::{info, warn};

/// Requests slower than that are logged as warnings
const SLOW_REQUEST_SEC: f64 = 1.0;

/// Handlers can attach this to a request in order to report how many entities they returned
pub struct RequestExtension {
    pub entities: i64,
}

impl RequestExtension {
    pub fn new(entities: usize) -> Self {
        RequestExtension {
            entities: entities as i64,
        }
    }
}

pub async fn handle_request(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let req_query_string = req.query_string().to_string();
    let req_method = req.method().as_str().to_string();
    let req_path = req.path().to_string();
    let req_real_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or_default()
        .to_string();
    let req_time = OffsetDateTime::now_utc();
    let res = next.call(req).await;
    let Ok(res) = res else { return res };
    let entities = res
        .request()
        .extensions()
        .get::<RequestExtension>()
        .map(|it| it.entities);
    let res_status = res.status().as_u16();
    let res_time_sec = (OffsetDateTime::now_utc() - req_time).as_seconds_f64();
    if res_time_sec > SLOW_REQUEST_SEC {
        warn!(
            req_query_string,
            req_method,
            req_path,
            req_real_ip,
            res_status,
            entities,
            res_time_sec,
            "Slow request",
        );
    } else {
        info!(
            req_query_string,
            req_method,
            req_path,
            req_real_ip,
            res_status,
            entities,
            res_time_sec,
        );
    }
    Ok(res)
}

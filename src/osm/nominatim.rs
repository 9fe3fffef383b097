use crate::{conf::Conf, Result};
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use tracing::{error, info, warn};
use url::Url;

#[derive(Deserialize, Debug, Default)]
struct ReverseResponse {
    display_name: Option<String>,
}

impl ReverseResponse {
    fn display_name(self) -> Option<String> {
        self.display_name.filter(|it| !it.trim().is_empty())
    }
}

pub fn reverse_url(base_url: &str, lat: f64, lon: f64) -> Result<Url> {
    let lat = lat.to_string();
    let lon = lon.to_string();
    Ok(Url::parse_with_params(
        base_url,
        &[
            ("format", "json"),
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("zoom", "18"),
            ("addressdetails", "1"),
        ],
    )?)
}

/// Human readable address of a point, if Nominatim knows one
pub async fn reverse(
    client: &reqwest::Client,
    conf: &Conf,
    lat: f64,
    lon: f64,
) -> Result<Option<String>> {
    let url = reverse_url(&conf.nominatim_url, lat, lon)?;
    let response = client
        .get(url)
        .header(USER_AGENT, conf.user_agent.as_str())
        .send()
        .await?;
    info!(http_status_code = ?response.status(), "Got Nominatim response");
    let response: ReverseResponse = response.error_for_status()?.json().await?;
    Ok(response.display_name())
}

/// Same as [`reverse`] but never fails, any problem results in the configured fallback address
pub async fn address_or_fallback(
    client: &reqwest::Client,
    conf: &Conf,
    lat: f64,
    lon: f64,
) -> String {
    match reverse(client, conf, lat, lon).await {
        Ok(Some(address)) => address,
        Ok(None) => {
            warn!(lat, lon, "Nominatim returned no address, using fallback");
            conf.fallback_address.clone()
        }
        Err(e) => {
            error!(lat, lon, error = e.to_string(), "Reverse geocoding failed");
            conf.fallback_address.clone()
        }
    }
}

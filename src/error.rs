use actix_web::{error::QueryPayloadError, HttpRequest};
use std::fmt::{Display, Formatter};

use crate::rest::error::RestApiError;

#[derive(Debug)]
pub enum Error {
    IO(std::io::Error),
    SerdeJson(serde_json::Error),
    GeoJson(geojson::Error),
    Reqwest(reqwest::Error),
    Url(url::ParseError),
    InvalidInput(String),
    InvalidZone { index: usize, reason: String },
    CLI(String),
    Generic(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IO(err) => err.fmt(f),
            Error::SerdeJson(err) => err.fmt(f),
            Error::GeoJson(err) => err.fmt(f),
            Error::Reqwest(err) => err.fmt(f),
            Error::Url(err) => err.fmt(f),
            Error::InvalidInput(err) => write!(f, "{}", err),
            Error::InvalidZone { index, reason } => {
                write!(f, "Invalid zone at index {}: {}", index, reason)
            }
            Error::CLI(err) => write!(f, "{}", err),
            Error::Generic(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error {
    fn from(str: String) -> Self {
        Error::Generic(str)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerdeJson(error)
    }
}

impl From<geojson::Error> for Error {
    fn from(error: geojson::Error) -> Self {
        Error::GeoJson(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Reqwest(error)
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Error::Url(error)
    }
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RestApiError::invalid_input(format!("Invalid arguments: {err}")).into()
}

use crate::{Error, Result};
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";
pub const DEFAULT_USER_AGENT: &str = "CivicConnect-Belagavi/1.0";
pub const DEFAULT_FALLBACK_ADDRESS: &str = "Belagavi, Karnataka, India";

#[derive(Debug, Clone, PartialEq)]
pub struct Conf {
    pub bind_addr: String,
    pub port: u16,
    /// Bundled boundaries are used when this is empty
    pub zones_file: Option<PathBuf>,
    pub nominatim_url: String,
    pub user_agent: String,
    pub fallback_address: String,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            port: DEFAULT_PORT,
            zones_file: None,
            nominatim_url: DEFAULT_NOMINATIM_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            fallback_address: DEFAULT_FALLBACK_ADDRESS.into(),
        }
    }
}

impl Conf {
    pub fn from_env() -> Result<Conf> {
        Conf::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Conf> {
        let var = |name: &str| lookup(name).filter(|it| !it.trim().is_empty());
        let defaults = Conf::default();
        let port = match var("CIVICMAP_PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|_| {
                Error::InvalidInput(format!("CIVICMAP_PORT should be a valid port, got {port}"))
            })?,
            None => defaults.port,
        };
        Ok(Conf {
            bind_addr: var("CIVICMAP_BIND_ADDR").unwrap_or(defaults.bind_addr),
            port,
            zones_file: var("CIVICMAP_ZONES_FILE").map(PathBuf::from),
            nominatim_url: var("CIVICMAP_NOMINATIM_URL").unwrap_or(defaults.nominatim_url),
            user_agent: var("CIVICMAP_USER_AGENT").unwrap_or(defaults.user_agent),
            fallback_address: var("CIVICMAP_FALLBACK_ADDRESS")
                .unwrap_or(defaults.fallback_address),
        })
    }
}

#[cfg(test)]
mod test {
    use super::Conf;
    use crate::Error;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults() {
        assert_eq!(Conf::default(), Conf::from_lookup(lookup(&[])).unwrap());
    }

    #[test]
    fn overrides() {
        let conf = Conf::from_lookup(lookup(&[
            ("CIVICMAP_BIND_ADDR", "0.0.0.0"),
            ("CIVICMAP_PORT", "9000"),
            ("CIVICMAP_ZONES_FILE", "/etc/civicmap/zones.geojson"),
            ("CIVICMAP_USER_AGENT", "test-agent"),
        ]))
        .unwrap();
        assert_eq!("0.0.0.0", conf.bind_addr);
        assert_eq!(9000, conf.port);
        assert_eq!(
            Some(PathBuf::from("/etc/civicmap/zones.geojson")),
            conf.zones_file
        );
        assert_eq!("test-agent", conf.user_agent);
        assert_eq!(super::DEFAULT_NOMINATIM_URL, conf.nominatim_url);
    }

    #[test]
    fn blank_values_are_ignored() {
        let conf = Conf::from_lookup(lookup(&[("CIVICMAP_ZONES_FILE", "  ")])).unwrap();
        assert_eq!(None, conf.zones_file);
    }

    #[test]
    fn invalid_port() {
        let res = Conf::from_lookup(lookup(&[("CIVICMAP_PORT", "eighty")]));
        assert!(matches!(res, Err(Error::InvalidInput(_))));
    }
}

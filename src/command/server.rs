use crate::conf::Conf;
use crate::resolver::Resolver;
use crate::{server, zone, Result};

pub async fn run(conf: Conf) -> Result<()> {
    let zones = zone::loader::load(&conf)?;
    server::run(conf, Resolver::new(zones)).await
}

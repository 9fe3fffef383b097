pub use error::Error;
mod command;
mod conf;
mod error;
mod geometry;
mod log;
mod osm;
mod resolver;
mod rest;
mod server;
#[cfg(test)]
mod test;
mod zone;
use conf::Conf;
use std::env;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[actix_web::main]
async fn main() -> Result<()> {
    log::init();

    let conf = Conf::from_env()?;

    let args: Vec<String> = env::args().collect();

    let command = match args.get(1) {
        Some(some) => some,
        None => Err(Error::CLI("No actions passed".into()))?,
    };

    match command.as_str() {
        "server" => command::server::run(conf).await?,
        "resolve" => command::resolve::run(&args[2..], &conf)?,
        "distance" => command::distance::run(&args[2..])?,
        "zones" => command::zones::run(&conf)?,
        first_arg => Err(Error::CLI(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}

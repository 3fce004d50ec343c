use actix_web::web;
use std::io;
use std::process;
use std::sync::Arc;

#[macro_use]
extern crate log;

mod cli;
mod config;
mod core;
mod database;
mod errors;
mod handlers;
mod job;
mod server;

use crate::config::{Config, Settings};
use crate::database::Database;
use crate::errors::JobTrackerError;
use crate::job::mongo::MongoJobRepository;
use crate::job::JobRepository;

fn init_logger(verbose: bool) {
    let filter = if verbose {
        "jobtracker=debug,actix_web=info"
    } else {
        "jobtracker=info,actix_web=info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn fatal(err: JobTrackerError) -> ! {
    error!("{}", err);
    process::exit(1);
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    let matches = cli::ask().get_matches();

    init_logger(matches.is_present("verbose"));

    let config = matches
        .value_of("config")
        .map(Config::load)
        .unwrap_or_else(|| Ok(Config::default()))
        .unwrap_or_else(|err| fatal(err));
    let settings = Settings::resolve(&matches, config);

    debug!("Using settings {:?}", &settings);

    let uri = database::connection_string().unwrap_or_else(|err| fatal(err));
    let database = Database::connect(&uri, &settings.database, settings.timeout)
        .await
        .unwrap_or_else(|err| fatal(err));

    let jobs: Arc<dyn JobRepository> = Arc::new(MongoJobRepository::new(
        &database,
        &settings.collection,
        settings.timeout,
    ));

    let result = match matches.subcommand_name() {
        Some("seed") => job::seed(jobs.as_ref())
            .await
            .map(|ids| info!("Seeded jobs {}", ids.join(", ")))
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err)),
        _ => server::serve(settings.port, web::Data::from(jobs)).await,
    };

    database.disconnect().await;

    result
}

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::io;

use crate::config::Config;
use crate::db::PgStore;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    let store = PgStore::connect(&config).map_err(|err| {
        error!("Invalid database configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;
    store.init(&config).await;
    let store = web::Data::new(store);

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);

    let app_store = store.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(app_store.clone())
            .configure(handlers::configure::<PgStore>)
    })
    .bind((host, port))?
    .run()
    .await?;

    store.close().await;
    Ok(())
}

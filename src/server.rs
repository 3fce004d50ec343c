use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::handlers;
use crate::job::JobRepository;

const ALLOWED_METHODS: [&str; 7] = ["GET", "POST", "HEAD", "PUT", "DELETE", "PATCH", "OPTIONS"];

pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(ALLOWED_METHODS)
        .allowed_headers(vec![
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::CONTENT_LENGTH,
            header::ACCEPT_LANGUAGE,
            header::ACCEPT_ENCODING,
            header::CONNECTION,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
        ])
        .supports_credentials()
}

pub async fn serve(port: u16, jobs: web::Data<dyn JobRepository>) -> std::io::Result<()> {
    let socket = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);

    info!("Starting job tracker at {}", &socket);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors())
            .app_data(jobs.clone())
            .configure(handlers::configure)
    })
    .bind(socket)?
    .run()
    .await
}

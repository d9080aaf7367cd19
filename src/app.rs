use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{get, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use sqlx::PgPool;

use tracing_actix_web::TracingLogger;

use crate::controller::{companies, employees};

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// Run the application on a specified TCP listener
pub fn run(listener: TcpListener, pool: PgPool) -> anyhow::Result<Server> {
    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(pool.clone())
            .service(health_check)
            .service(companies::scope())
            .service(employees::scope())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

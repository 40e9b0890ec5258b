use actix_web::{web, App, HttpServer};
use backend::config::db::{sql_log_requested, DbConfig};
use backend::config::server::ServerConfig;
use backend::infra::lifecycle::{shutdown, Phase};
use backend::infra::state::build_state;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A .env file is optional; real environment variables take precedence.
    dotenvy::dotenv().ok();

    telemetry::init_tracing(sql_log_requested(|name| std::env::var(name).ok()));

    let db_config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(phase = %Phase::Starting, error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(phase = %Phase::Starting, error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    info!(phase = %Phase::Starting, host = %server_config.host, port = server_config.port, "starting backend");

    let app_state = match build_state().with_db(db_config).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(phase = %Phase::Starting, error = %e, "startup aborted");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state.clone());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run();

    info!(phase = %Phase::Ready, host = %server_config.host, port = server_config.port, "accepting requests");

    let result = server.await;

    shutdown(app_state).await;
    result
}

use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod batch;
pub mod chart;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod gpa;
pub mod roll_number;
pub mod state;

pub use crate::config::AppConfig;
pub use crate::error::GpaError;
pub use crate::state::AppState;

/// Body of every 400 response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid roll number format. Please use FAXX-ABC-000")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(crate::gpa::handlers::get_gpa, crate::gpa::handlers::download),
    components(schemas(
        gpa::models::GetGpaRequest,
        gpa::models::GpaSuccessResponse,
        ErrorResponse,
    )),
    tags((name = "GPA Chart", description = "Chart lookup and download endpoints."))
)]
pub struct ApiDoc;

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let app_state = match AppState::from_config(&config) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to initialise chart fetcher: {}", e);
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("must_gpa")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    if !config.static_dir.is_dir() {
        log::warn!(
            "Static directory {} not found, '/' will return 404",
            config.static_dir.display()
        );
    }

    log::info!(
        "Starting server at http://{}:{} (charts from {})",
        config.bind_host,
        config.bind_port,
        config.chart_base_url
    );

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .expose_headers(vec![header::CONTENT_DISPOSITION])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(gpa::config)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind((config.bind_host.as_str(), config.bind_port))?
    .run()
    .await
}

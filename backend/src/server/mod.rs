//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use donor_backend::trace_requests;
#[cfg(debug_assertions)]
use donor_backend::doc::ApiDoc;
use donor_backend::domain::DonorService;
use donor_backend::inbound::http::api_scope;
use donor_backend::inbound::http::health::{HealthState, live, ready};
use donor_backend::inbound::http::state::HttpState;
use donor_backend::outbound::memory::InMemoryDonorRepository;
use donor_backend::outbound::persistence::{DbPool, DieselDonorRepository, run_migrations};

/// Wire the donor service over PostgreSQL when a database URL is set,
/// otherwise over the in-memory store.
///
/// # Errors
/// Returns [`std::io::Error`] when migrations fail or the pool cannot be
/// built.
async fn build_http_state(settings: &ServerSettings) -> std::io::Result<HttpState> {
    let clock = Arc::new(DefaultClock);
    let Some(pool_config) = settings.pool_config() else {
        warn!("DONOR_DATABASE_URL is not set; donors are kept in memory");
        let service = DonorService::new(Arc::new(InMemoryDonorRepository::default()), clock);
        return Ok(HttpState::from_service(Arc::new(service)));
    };

    run_migrations(&pool_config.database_url)
        .await
        .map_err(|e| std::io::Error::other(format!("donor migrations failed: {e}")))?;
    let pool = DbPool::connect(&pool_config)
        .await
        .map_err(std::io::Error::other)?;
    info!("donor store connected");
    let service = DonorService::new(Arc::new(DieselDonorRepository::new(pool)), clock);
    Ok(HttpState::from_service(Arc::new(service)))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(from_fn(trace_requests))
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the Actix HTTP server and mark it ready once bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when the donor store cannot be prepared or
/// the socket cannot be bound.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    settings: ServerSettings,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&settings).await?);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(settings.bind_addr())?
    .run();

    info!(host = settings.host(), port = settings.port(), "donor service listening");
    health_state.mark_ready();
    Ok(server)
}

//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use cinema_api::Trace;
#[cfg(debug_assertions)]
use cinema_api::doc::ApiDoc;
use cinema_api::inbound::http::api_scope;
use cinema_api::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    #[cfg_attr(not(debug_assertions), expect(unused_mut, reason = "docs are debug-only"))]
    let mut app = App::new()
        .app_data(state)
        .wrap(Trace)
        .service(api_scope());

    #[cfg(debug_assertions)]
    {
        app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app
}

/// Bind the HTTP server described by `config`.
///
/// # Errors
///
/// Returns an I/O error when the listening socket cannot be bound.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let state = build_http_state(&config);
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr())?
        .run();
    Ok(server)
}

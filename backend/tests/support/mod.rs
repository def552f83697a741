//! Shared helpers for HTTP endpoint integration tests.

use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use cinema_api::Trace;
use cinema_api::domain::{LookupGuard, Movie, User};
use cinema_api::inbound::http::api_scope;
use cinema_api::inbound::http::state::HttpState;
use cinema_api::outbound::memory::InMemoryRepository;

/// Initialised API service over in-memory stores.
pub async fn init_api(
    user_lookup: LookupGuard,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
{
    let state = HttpState::new(
        Arc::new(InMemoryRepository::<Movie>::new()),
        Arc::new(InMemoryRepository::<User>::new()),
        user_lookup,
    );
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(api_scope()),
    )
    .await
}

/// Status, `trace-id` header presence and body (`Value::Null` when empty).
pub struct Reply {
    pub status: StatusCode,
    pub has_trace_id: bool,
    pub body: Value,
}

/// Send `request` and collect the reply.
pub async fn send<S>(app: &S, request: test::TestRequest) -> Reply
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let has_trace_id = response.headers().contains_key("trace-id");
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    Reply {
        status,
        has_trace_id,
        body,
    }
}

/// Fields of every validation error, in response order.
pub fn error_fields(body: &Value) -> Vec<String> {
    body["validationErrors"]
        .as_array()
        .expect("validationErrors array")
        .iter()
        .map(|entry| entry["field"].as_str().expect("field name").to_owned())
        .collect()
}

/// Identifier from a 201 body.
pub fn created_id(body: &Value) -> i64 {
    body["id"].as_i64().expect("integer id")
}

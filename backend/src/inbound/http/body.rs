//! Request body decoding and shared response shapes.

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev, web};
use futures_util::future::LocalBoxFuture;
use serde::Serialize;

use crate::domain::{Payload, ResourceError, ResourceId};

use super::ApiResult;

/// Body of a `201 Created` response.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: ResourceId,
}

/// Decode a request body into a [`Payload`].
///
/// Only JSON content types are parsed; any other body, or none at all, is an
/// empty payload. A JSON body that is not an object is rejected.
///
/// # Errors
///
/// Returns [`ResourceError::MalformedPayload`] for a JSON body
/// that fails to parse or is not an object.
fn read_payload(req: &HttpRequest, body: &web::Bytes) -> ApiResult<Payload> {
    if !is_json(req.content_type()) {
        return Ok(Payload::empty());
    }
    Payload::from_slice(body)
}

/// Media types are case-insensitive, so `Application/JSON` is JSON too.
fn is_json(content_type: &str) -> bool {
    let essence = content_type.trim().to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

/// Extractor yielding the request body as a [`Payload`].
///
/// Non-JSON bodies decode to an empty payload; malformed JSON is rejected
/// with [`ResourceError::MalformedPayload`].
#[derive(Debug)]
pub struct RequestPayload(pub Payload);

impl FromRequest for RequestPayload {
    type Error = ResourceError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut dev::Payload) -> Self::Future {
        let req = req.clone();
        let bytes = web::Bytes::from_request(&req, payload);
        Box::pin(async move {
            let body = bytes
                .await
                .map_err(|err| ResourceError::malformed_payload(err.to_string()))?;
            read_payload(&req, &body).map(Self)
        })
    }
}

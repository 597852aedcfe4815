//! HTTP method override for HTML forms.
//!
//! Browsers can only submit `GET` and `POST`. A `POST` carrying `_method=DELETE`
//! (or `PUT` / `PATCH`) in its query string or url-encoded body is re-dispatched
//! with that method:
//!
//! ```html
//! <form action="/recordsDetails/3?_method=DELETE" method="post">
//! ```
//!
//! Must wrap the router from the outside so the rewritten method is seen by
//! routing; see [`crate::routes::app_router`].

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Name of the query parameter / form field holding the method.
pub const OVERRIDE_FIELD: &str = "_method";

/// Largest form body buffered while looking for [`OVERRIDE_FIELD`].
const FORM_BODY_LIMIT: usize = 64 * 1024;

const OVERRIDABLE: [Method; 3] = [Method::DELETE, Method::PUT, Method::PATCH];

pub async fn layer(req: Request, next: Next) -> Response {
    if req.method() != Method::POST {
        return next.run(req).await;
    }

    if let Some(method) = req.uri().query().and_then(find_override) {
        return next.run(with_method(req, method)).await;
    }

    if !is_form(&req) {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, FORM_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected oversized form body");
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };

    let method = std::str::from_utf8(&bytes).ok().and_then(find_override);
    let req = Request::from_parts(parts, Body::from(bytes));

    match method {
        Some(method) => next.run(with_method(req, method)).await,
        None => next.run(req).await,
    }
}

/// Extracts an allowed override method from url-encoded `pairs`.
pub fn find_override(pairs: &str) -> Option<Method> {
    url::form_urlencoded::parse(pairs.as_bytes())
        .find(|(key, _)| key == OVERRIDE_FIELD)
        .and_then(|(_, value)| Method::from_bytes(value.to_ascii_uppercase().as_bytes()).ok())
        .filter(|method| OVERRIDABLE.contains(method))
}

fn with_method(mut req: Request, method: Method) -> Request {
    tracing::debug!(from = %req.method(), to = %method, uri = %req.uri(), "Method override");
    *req.method_mut() = method;
    req
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

//! CORS middleware wiring for the gateway binaries.

use actix_cors::Cors;

use crate::policy::OriginResolver;

/// Build the gateway CORS middleware on top of an origin resolver.
///
/// actix-cors echoes the caller's Origin when the closure allows it and
/// omits the allow-origin header when it does not; requests without an
/// Origin header never reach the closure and pass through untouched, which
/// matches the policy of never blocking same-origin or non-browser callers.
pub fn build_cors(resolver: &OriginResolver) -> Cors {
    let resolver = resolver.clone();
    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            resolver.decide(origin.to_str().ok()).allowed
        })
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::AUTHORIZATION,
            actix_web::http::header::ACCEPT,
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::HeaderName::from_static("x-api-key"),
        ])
        .max_age(3600)
}

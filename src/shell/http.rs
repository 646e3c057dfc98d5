// HTTP surface of the host.
//
// Purpose
// - Register the single fixed route and the ambient middleware.
//
// Boundaries
// - No custom not-found or method-not-allowed behavior. Requests the router
//   does not match fall through to the axum defaults.

use std::any::Any;

use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderValue, Response, StatusCode, header};
use axum::routing::get;
use http_body_util::Full;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::shell::config::Environment;

async fn hello() -> &'static str {
    "Hello World!"
}

pub fn router() -> Router {
    Router::new().route("/", get(hello))
}

/// The router plus the ambient middleware for the given environment.
pub fn app(environment: &Environment) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(panic_layer(environment))
}

type PanicResponder = fn(Box<dyn Any + Send + 'static>) -> Response<Full<Bytes>>;

// Development exposes the panic payload in the response body, production
// returns a fixed generic line. Both log the payload at error level.
fn panic_layer(environment: &Environment) -> CatchPanicLayer<PanicResponder> {
    let respond: PanicResponder = if environment.is_development() {
        development_panic_response
    } else {
        production_panic_response
    };
    CatchPanicLayer::custom(respond)
}

fn development_panic_response(err: Box<dyn Any + Send + 'static>) -> Response<Full<Bytes>> {
    let details = panic_details(err);
    tracing::error!(%details, "request handler panicked");
    plain_500(format!("Unhandled panic: {details}"))
}

fn production_panic_response(err: Box<dyn Any + Send + 'static>) -> Response<Full<Bytes>> {
    let details = panic_details(err);
    tracing::error!(%details, "request handler panicked");
    plain_500("Internal Server Error".to_string())
}

fn panic_details(err: Box<dyn Any + Send + 'static>) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    }
}

fn plain_500(body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

#[cfg(test)]
mod hello_http_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::{panic_layer, router};
    use crate::shell::config::Environment;

    async fn boom() -> &'static str {
        panic!("boom in handler")
    }

    fn panicking_app(environment: &Environment) -> Router {
        Router::new()
            .route("/boom", get(boom))
            .layer(panic_layer(environment))
    }

    #[tokio::test]
    async fn it_should_return_200_hello_world_on_get_root() {
        let response = router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Hello World!");
    }

    #[tokio::test]
    async fn it_should_include_panic_details_in_development() {
        let response = panicking_app(&Environment::Development)
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("boom in handler"));
    }

    #[tokio::test]
    async fn it_should_hide_panic_details_in_production() {
        let response = panicking_app(&Environment::Production)
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(body, "Internal Server Error");
        assert!(!body.contains("boom"));
    }
}

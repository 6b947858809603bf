//! Response rendering.
//!
//! # Design Decisions
//! - Every handler answers `200 OK` with a JSON object `{"message": ...}`
//! - Captured text is serialized as a JSON string, never as markup

use axum::response::{IntoResponse, Json, Response};

use crate::routing::Greeting;

impl IntoResponse for Greeting {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};

    #[test]
    fn test_greeting_is_json() {
        let response = Greeting::new("hi").into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}

//! CORS policy for browser clients

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::domain::DomainError;

/// Build the CORS layer; `None` when no origins are configured
pub fn cors_layer(allowed_origins: &[String]) -> Result<Option<CorsLayer>, DomainError> {
    if allowed_origins.is_empty() {
        return Ok(None);
    }

    let allow_origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| {
                    DomainError::configuration(format!("invalid CORS origin '{}': {}", origin, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        AllowOrigin::list(origins)
    };

    let layer = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::LOCATION]);

    Ok(Some(layer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_origins_disables_cors() {
        assert!(cors_layer(&[]).unwrap().is_none());
    }

    #[test]
    fn test_origin_list_and_wildcard() {
        assert!(cors_layer(&["http://localhost:9000".to_string()]).unwrap().is_some());
        assert!(cors_layer(&["*".to_string()]).unwrap().is_some());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let err = cors_layer(&["bad\norigin".to_string()]).unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
    }
}

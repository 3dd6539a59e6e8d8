//! Path and query extractors that reject with error envelopes

use axum::extract::FromRequestParts;

use super::error::ApiError;

/// Path parameters; a segment that does not decode is a 400 error envelope
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

/// Query parameters; a query string that does not decode is a 400 error envelope
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct Query<T>(pub T);

#[cfg(test)]
mod tests {
    use axum::http::{Request, StatusCode};

    use super::*;
    use crate::domain::ListQuery;

    #[tokio::test]
    async fn test_query_decodes_paging() {
        let (mut parts, _) = Request::builder()
            .uri("/registered_models?pageSize=5&sortOrder=DESC")
            .body(())
            .unwrap()
            .into_parts();

        let Query(query) = Query::<ListQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(query.page_size.as_deref(), Some("5"));
        assert_eq!(query.sort_order.as_deref(), Some("DESC"));
    }

    #[tokio::test]
    async fn test_duplicate_query_key_is_bad_request() {
        let (mut parts, _) = Request::builder()
            .uri("/registered_models?pageSize=1&pageSize=2")
            .body(())
            .unwrap()
            .into_parts();

        let err = Query::<ListQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.code, "400");
        assert!(err.message().contains("pageSize"));
    }
}

// Error boundary: domain errors get their specific status here; anything
// the storage layer coughed up becomes a generic 500 with the cause kept
// out of the response body.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::api::models::ErrorBody;
use crate::catalog::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request rejected before reaching the catalog service.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(CatalogError::NotRegistered) => StatusCode::NOT_FOUND,
            ApiError::Catalog(CatalogError::AlreadyRegistered) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Catalog(CatalogError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Catalog(CatalogError::Storage(cause)) = self {
            tracing::error!(error = %cause, "storage failure while handling request");
            return HttpResponse::InternalServerError()
                .json(ErrorBody::new("erro interno no servidor"));
        }
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;

    #[test]
    fn domain_errors_map_to_specific_statuses() {
        assert_eq!(
            ApiError::from(CatalogError::NotRegistered).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CatalogError::AlreadyRegistered).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Validation("pagina".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn storage_errors_render_generic_body() {
        let err = ApiError::from(CatalogError::Storage(StorageError::Unavailable(
            anyhow::anyhow!("connection refused to 10.0.0.1:5432"),
        )));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = err.error_response();
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["erro"], "erro interno no servidor");
    }
}

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use super::error::ServiceError;
use super::model::{DrawInit, DrawOutcome, DrawRecord};

/// Error payload returned by the draw endpoints on non-success responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The remote side of the lucky wheel. Futures are local: everything runs on
/// the UI event loop.
pub trait DrawService {
    fn init_draw(&self) -> LocalBoxFuture<'_, Result<DrawInit, ServiceError>>;

    /// Consumes one draw credit. Answers `ServiceError::NoCredits` when none are left.
    fn perform_draw(&self) -> LocalBoxFuture<'_, Result<DrawOutcome, ServiceError>>;

    fn draw_records(&self) -> LocalBoxFuture<'_, Result<Vec<DrawRecord>, ServiceError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_fields_are_optional() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"code": "NO_DRAW_CHANCES"}"#).unwrap();
        assert_eq!(body.code.as_deref(), Some("NO_DRAW_CHANCES"));
        assert_eq!(body.message, None);

        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body, ApiErrorBody::default());
    }
}

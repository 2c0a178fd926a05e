use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_graphql::ErrorExtensions;
use chrono::Utc;
use sea_orm::DbErr;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // application taxonomy
    #[error("validation error: {message}")]
    Validation {
        message: String,
        details: BTreeMap<String, String>,
    },
    #[error("authentication required")]
    Unauthorized,
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("already exists")]
    AlreadyExists,
    #[error("conflict: {0}")]
    Conflict(String),

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: String,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a BTreeMap<String, String>>,
    timestamp: String,
}

impl AppError {
    /// Stable string code carried on every error body and GraphQL extension.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Unauthorized => "AUTHENTICATION_ERROR",
            Self::Forbidden(_) => "AUTHORIZATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyExists | Self::Conflict(_) => "CONFLICT",
            Self::Db(_) | Self::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn details(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Validation { details, .. } => Some(details),
            _ => None,
        }
    }

    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg.clone()),
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists | Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            message: self.to_string(),
            code: self.kind(),
            details: self.details(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

// The same taxonomy surfaces on the GraphQL boundary as error extensions,
// so `?` works in resolvers returning `async_graphql::Result`.
impl From<AppError> for async_graphql::Error {
    fn from(err: AppError) -> Self {
        let message = err.to_string();
        async_graphql::Error::new(message).extend_with(|_, ext| {
            ext.set("code", err.kind());
            if let Some(details) = err.details() {
                let value = serde_json::to_value(details)
                    .ok()
                    .and_then(|v| async_graphql::Value::from_json(v).ok())
                    .unwrap_or_default();
                ext.set("details", value);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let err = AppError::Validation {
            message: "bad input".into(),
            details: BTreeMap::new(),
        };
        assert_eq!(err.kind(), "VALIDATION_ERROR");
        assert_eq!(AppError::Unauthorized.kind(), "AUTHENTICATION_ERROR");
        assert_eq!(AppError::Forbidden("x".into()).kind(), "AUTHORIZATION_ERROR");
        assert_eq!(AppError::NotFound("x".into()).kind(), "NOT_FOUND");
        assert_eq!(AppError::AlreadyExists.kind(), "CONFLICT");
        assert_eq!(AppError::Internal("x".into()).kind(), "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err: AppError = DbErr::RecordNotFound("User not found".into()).into();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_error_carries_field_details() {
        let mut details = BTreeMap::new();
        details.insert("email".to_string(), "is required".to_string());
        let err = AppError::Validation {
            message: "Invalid input".into(),
            details,
        };
        let gql: async_graphql::Error = err.into();
        let ext = gql.extensions.expect("extensions set");
        assert_eq!(
            ext.get("code"),
            Some(&async_graphql::Value::from("VALIDATION_ERROR"))
        );
        assert!(ext.get("details").is_some());
    }
}

use std::fmt::Formatter;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{models::InvitationStatus, staffing::RoleGroup};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ErrorDetails {
    pub code: i64,
    pub message: String,
    pub details: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ResponseError {
    pub error: ErrorDetails,
}

#[derive(Debug)]
pub enum Resource {
    Boat,
    Skipper,
    Event,
    EventType,
    Invitation,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't find resource: {0}.")]
    ResourceNotFound(Resource),
    #[error("Skipper {0} already holds an invitation for this event.")]
    DuplicateInvitation(String),
    #[error("The {0} quota for this event is already fully confirmed.")]
    QuotaFull(&'static str),
    #[error("Invitation cannot move from {from:?} to {to:?}.")]
    InvalidTransition {
        from: InvitationStatus,
        to: InvitationStatus,
    },
    #[error("Event is finalized and can no longer be changed.")]
    EventFinalized,
    #[error("Not every role quota is confirmed yet.")]
    NotAllConfirmed,
    #[error("There are no pending invitations to remind.")]
    NoPendingInvitations,
    #[error("{0}")]
    Validation(String),
    #[error("Invalid form body: {0}.")]
    InvalidJson(#[from] ValidationErrors),
    #[error("Invalid JSON body: {0}.")]
    JsonRejection(#[from] JsonRejection),
    #[error("Invalid query parameters: {0}.")]
    QueryRejection(#[from] QueryRejection),
    #[error("Invalid path parameters: {0}.")]
    PathRejection(#[from] PathRejection),
}

impl AppError {
    pub fn quota_full(group: RoleGroup) -> Self {
        AppError::QuotaFull(group.label())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, client_message, internal_details) = match &self {
            AppError::ResourceNotFound(res) => (
                StatusCode::NOT_FOUND,
                "Resource not found.".to_string(),
                format!("Resource {} wasn't found.", res),
            ),
            AppError::DuplicateInvitation(_) => (
                StatusCode::CONFLICT,
                "This skipper is already invited to this event.".to_string(),
                self.to_string(),
            ),
            AppError::QuotaFull(_) => (
                StatusCode::CONFLICT,
                "This role's quota is already fully confirmed.".to_string(),
                self.to_string(),
            ),
            AppError::InvalidTransition { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "This invitation cannot make that transition.".to_string(),
                self.to_string(),
            ),
            AppError::EventFinalized => (
                StatusCode::CONFLICT,
                "This event is finalized and can no longer be changed.".to_string(),
                self.to_string(),
            ),
            AppError::NotAllConfirmed => (
                StatusCode::CONFLICT,
                "Not every role quota is confirmed yet.".to_string(),
                self.to_string(),
            ),
            AppError::NoPendingInvitations => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "There are no pending invitations to remind.".to_string(),
                self.to_string(),
            ),
            AppError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                msg.clone(),
                self.to_string(),
            ),
            AppError::InvalidJson(e) => (
                StatusCode::BAD_REQUEST,
                "Invalid form body.".to_string(),
                format!("Invalid body provided (validation): {}.", e),
            ),

            // Extractor Rejection Mappings
            AppError::JsonRejection(e) => match e {
                JsonRejection::MissingJsonContentType(_) => (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "Content-Type header must be application/json.".to_string(),
                    e.to_string(),
                ),
                JsonRejection::JsonSyntaxError(_) => (
                    StatusCode::BAD_REQUEST,
                    "Malformed JSON in request body.".to_string(),
                    e.to_string(),
                ),
                JsonRejection::JsonDataError(e) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Request body is valid JSON but has incorrect fields.".to_string(),
                    format!("JSON deserialization error: {}", e),
                ),
                _ => (
                    StatusCode::BAD_REQUEST,
                    "Invalid JSON request.".to_string(),
                    e.to_string(),
                ),
            },
            AppError::QueryRejection(e) => (
                StatusCode::BAD_REQUEST,
                "Invalid query parameters.".to_string(),
                e.to_string(),
            ),
            AppError::PathRejection(e) => (
                StatusCode::BAD_REQUEST,
                "Invalid path parameters.".to_string(),
                e.to_string(),
            ),
        };

        let error_body = Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": client_message,
                "details": internal_details,
            }
        }));

        (status, error_body).into_response()
    }
}

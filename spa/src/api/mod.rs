pub mod analytics_api;
pub mod auth_api;
pub mod favorites_api;
pub mod movies_api;
pub mod reviews_api;

use client_core::SessionFlags;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::notifications::{Notifier, ToastLevel};
use crate::session::{BrowserSession, SessionAction, SessionContext};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("authentication_required")]
    Unauthorized,
    #[error("action_not_allowed")]
    Forbidden,
    #[error("not_found")]
    NotFound,
    #[error("unexpected_status: status={status}, body={body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("request_failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("invalid_payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ApiError {
    /// The backend rejected the token; the session must be dropped.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// `Authorization` header value for `session`, or [`ApiError::Unauthorized`]
/// without touching the network when nobody is logged in.
pub fn authorization(session: &BrowserSession) -> Result<String, ApiError> {
    session.authorization_header().ok_or(ApiError::Unauthorized)
}

async fn check_status(response: Response, operation: &str) -> Result<Response, ApiError> {
    match response.status() {
        200..=299 => Ok(response),
        401 => Err(ApiError::Unauthorized),
        403 => Err(ApiError::Forbidden),
        404 => Err(ApiError::NotFound),
        status => {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Api {operation}, error = unexpected response, status={status}, response={body}");
            Err(ApiError::UnexpectedStatus { status, body })
        }
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T, ApiError> {
    let response = check_status(response, operation).await?;
    Ok(response.json::<T>().await?)
}

/// Logs a failed call and tells the user. A rejected token ends the session.
pub fn report(error: &ApiError, session: &SessionContext, notifier: &Notifier, action: &str) {
    if error.is_unauthorized() {
        log::warn!("Api {action} rejected the session, logging out");
        if session.is_logged_in() {
            session.dispatch(SessionAction::Logout);
        }
        notifier.push(ToastLevel::Warning, "Your session has expired, please log in again");
        return;
    }
    log::error!("Api {action} failed, error={error}");
    let message = match error {
        ApiError::Forbidden => format!("Not allowed to {action}"),
        ApiError::NotFound => format!("Could not {action}: not found"),
        _ => format!("Could not {action}, please try again"),
    };
    notifier.error(message);
}

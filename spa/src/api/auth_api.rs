use gloo_net::http::Request;
use shared::{SignUpRequest, TokenResponse, User};

use crate::api::{check_status, read_json, ApiError};
use crate::config::api_url;

/// OAuth2 password flow: credentials go as a form body, not JSON.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    let endpoint = api_url("/api/users/token");
    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("username", username)
        .append_pair("password", password)
        .finish();
    log::info!("Doing login, endpoint={endpoint}");
    let response = Request::post(&endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form)?
        .send()
        .await?;
    let token = read_json::<TokenResponse>(response, "login").await?;
    log::info!("Api auth login, username={username}");
    Ok(token)
}

pub async fn register(request: &SignUpRequest) -> Result<User, ApiError> {
    let endpoint = api_url("/api/users/register");
    let request_body = serde_json::to_string(request)?;
    let response = Request::post(&endpoint)
        .header("Content-Type", "application/json")
        .body(request_body)?
        .send()
        .await?;
    let user = read_json::<User>(response, "register").await?;
    log::info!("Api register, username={}", user.username);
    Ok(user)
}

/// Profile for an `Authorization` header value as produced by the session.
pub async fn get_user_profile(authorization: &str) -> Result<User, ApiError> {
    let endpoint = api_url("/api/users/me");
    let response = Request::get(&endpoint)
        .header("Authorization", authorization)
        .send()
        .await?;
    let user = read_json::<User>(response, "get user profile").await?;
    log::info!("Api get user profile, username={}", user.username);
    Ok(user)
}

pub async fn list_users(authorization: &str) -> Result<Vec<User>, ApiError> {
    let endpoint = api_url("/api/users/users");
    let response = Request::get(&endpoint)
        .header("Authorization", authorization)
        .send()
        .await?;
    let response = check_status(response, "list users").await?;
    Ok(response.json::<Vec<User>>().await?)
}

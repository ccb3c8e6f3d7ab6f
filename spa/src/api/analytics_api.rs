use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::{MovieAnalytics, ReviewAnalytics, UserAnalytics};

use crate::api::{read_json, ApiError};
use crate::config::api_url;

async fn fetch<T: DeserializeOwned>(authorization: &str, path: &str) -> Result<T, ApiError> {
    let endpoint = api_url(path);
    let response = Request::get(&endpoint)
        .header("Authorization", authorization)
        .send()
        .await?;
    log::info!("Api analytics, endpoint={endpoint}");
    read_json::<T>(response, path).await
}

pub async fn reviews(authorization: &str) -> Result<ReviewAnalytics, ApiError> {
    fetch(authorization, "/api/analytics/reviews").await
}

pub async fn movies(authorization: &str) -> Result<MovieAnalytics, ApiError> {
    fetch(authorization, "/api/analytics/movies").await
}

pub async fn users(authorization: &str) -> Result<UserAnalytics, ApiError> {
    fetch(authorization, "/api/analytics/users").await
}

use gloo_net::http::Request;
use shared::{NewReviewRequest, Review};
use uuid::Uuid;

use crate::api::{read_json, ApiError};
use crate::config::api_url;

/// The backend reads the review fields from the query string.
pub async fn create(authorization: &str, request: &NewReviewRequest) -> Result<Review, ApiError> {
    let endpoint = api_url("/api/reviews/");
    let response = Request::post(&endpoint)
        .header("Authorization", authorization)
        .query([
            ("movie_id", request.movie_id.as_str()),
            ("content", request.content.as_str()),
            ("sentiment", request.sentiment.as_ref()),
        ])
        .send()
        .await?;
    let review = read_json::<Review>(response, "create review").await?;
    log::info!(
        "Api create review, movie_id={}, review_id={}",
        request.movie_id,
        review.review_id
    );
    Ok(review)
}

pub async fn list_for_movie(movie_id: &str) -> Result<Vec<Review>, ApiError> {
    let endpoint = api_url(&format!("/api/reviews/movie/{movie_id}"));
    let response = Request::get(&endpoint).send().await?;
    read_json::<Vec<Review>>(response, "list movie reviews").await
}

pub async fn list_mine(authorization: &str) -> Result<Vec<Review>, ApiError> {
    let endpoint = api_url("/api/reviews/user/me");
    let response = Request::get(&endpoint)
        .header("Authorization", authorization)
        .send()
        .await?;
    read_json::<Vec<Review>>(response, "list my reviews").await
}

pub async fn delete(authorization: &str, review_id: &Uuid) -> Result<(), ApiError> {
    let endpoint = api_url(&format!("/api/reviews/{review_id}"));
    let response = Request::delete(&endpoint)
        .header("Authorization", authorization)
        .send()
        .await?;
    read_json::<serde_json::Value>(response, "delete review").await?;
    log::info!("Api delete review, review_id={review_id}");
    Ok(())
}

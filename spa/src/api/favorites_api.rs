use gloo_net::http::Request;
use shared::{FavoriteCheck, FavoriteMovie, FavoriteRecord};
use uuid::Uuid;

use crate::api::{read_json, ApiError};
use crate::config::api_url;

pub async fn add(authorization: &str, movie_id: &str) -> Result<FavoriteRecord, ApiError> {
    let endpoint = api_url(&format!("/api/favorites/{movie_id}"));
    let response = Request::post(&endpoint)
        .header("Authorization", authorization)
        .send()
        .await?;
    let favorite = read_json::<FavoriteRecord>(response, "add favorite").await?;
    log::info!("Api add favorite, movie_id={movie_id}");
    Ok(favorite)
}

pub async fn list(authorization: &str) -> Result<Vec<FavoriteMovie>, ApiError> {
    let endpoint = api_url("/api/favorites/");
    let response = Request::get(&endpoint)
        .header("Authorization", authorization)
        .send()
        .await?;
    read_json::<Vec<FavoriteMovie>>(response, "list favorites").await
}

pub async fn remove(authorization: &str, favorite_id: &Uuid) -> Result<(), ApiError> {
    let endpoint = api_url(&format!("/api/favorites/{favorite_id}"));
    let response = Request::delete(&endpoint)
        .header("Authorization", authorization)
        .send()
        .await?;
    read_json::<serde_json::Value>(response, "remove favorite").await?;
    log::info!("Api remove favorite, favorite_id={favorite_id}");
    Ok(())
}

/// Favorites are deleted by favorite id, which the session does not keep;
/// look it up from the current list first.
pub async fn remove_movie(authorization: &str, movie_id: &str) -> Result<(), ApiError> {
    let favorites = list(authorization).await?;
    match favorites.iter().find(|favorite| favorite.movie.movie_id == movie_id) {
        Some(favorite) => remove(authorization, &favorite.favorite_id).await,
        None => {
            log::warn!("Favorite already gone from backend, movie_id={movie_id}");
            Ok(())
        }
    }
}

pub async fn check(authorization: &str, movie_id: &str) -> Result<bool, ApiError> {
    let endpoint = api_url(&format!("/api/favorites/check/{movie_id}"));
    let response = Request::get(&endpoint)
        .header("Authorization", authorization)
        .send()
        .await?;
    let check = read_json::<FavoriteCheck>(response, "check favorite").await?;
    Ok(check.is_favorite)
}

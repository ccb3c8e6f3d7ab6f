use gloo_net::http::Request;
use shared::{GenreCount, Movie, MovieDetail};

use crate::api::{read_json, ApiError};
use crate::config::api_url;

pub const PAGE_SIZE: u32 = 12;

pub async fn list(page: u32) -> Result<Vec<Movie>, ApiError> {
    let endpoint = api_url("/api/movies/");
    let skip = (page.saturating_sub(1) * PAGE_SIZE).to_string();
    let limit = PAGE_SIZE.to_string();
    let response = Request::get(&endpoint)
        .query([("skip", skip.as_str()), ("limit", limit.as_str())])
        .send()
        .await?;
    let movies = read_json::<Vec<Movie>>(response, "list movies").await?;
    log::info!("Api list movies, page={page}, count={}", movies.len());
    Ok(movies)
}

pub async fn get_by_id(movie_id: &str) -> Result<Option<MovieDetail>, ApiError> {
    let endpoint = api_url(&format!("/api/movies/{movie_id}"));
    let response = Request::get(&endpoint).send().await?;
    log::info!("Api get movie by id, id={movie_id}");
    match read_json::<MovieDetail>(response, "get movie by id").await {
        Ok(movie) => Ok(Some(movie)),
        Err(ApiError::NotFound) => Ok(None),
        Err(error) => Err(error),
    }
}

pub async fn genre_stats() -> Result<Vec<GenreCount>, ApiError> {
    let endpoint = api_url("/api/movies/genres/stats");
    let response = Request::get(&endpoint).send().await?;
    read_json::<Vec<GenreCount>>(response, "genre stats").await
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};
use uuid::Uuid;

/// Movie ids are strings in the catalogue projection but integers in the raw
/// documents returned by the favorites and detail endpoints.
pub mod movie_id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawMovieId {
        Text(String),
        Integer(i64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawMovieId::deserialize(deserializer)? {
            RawMovieId::Text(id) => id,
            RawMovieId::Integer(id) => id.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Not exposed by `/api/users/me`, which only returns the public fields.
    #[serde(default, alias = "_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieImage {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(deserialize_with = "movie_id::deserialize")]
    pub movie_id: String,
    pub title: String,
    pub genre: String,
    pub description: String,
    pub url_film: String,
    pub img: MovieImage,
    pub source: String,
}

impl Movie {
    /// Genres are stored as a single `;` separated field.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .split(';')
            .map(str::trim)
            .filter(|genre| !genre.is_empty())
    }
}

/// Review scraped together with the movie catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieReview {
    pub review_id: String,
    pub uname: String,
    pub gender: String,
    #[serde(rename = "profileUrl")]
    pub profile_url: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub reviews: Vec<MovieReview>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreCount {
    #[serde(rename = "_id")]
    pub genre: String,
    pub count: u64,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReviewRequest {
    pub movie_id: String,
    pub content: String,
    pub sentiment: Sentiment,
}

/// Review written by a user of this application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub review_id: Uuid,
    pub user_id: String,
    #[serde(deserialize_with = "movie_id::deserialize")]
    pub movie_id: String,
    pub content: String,
    pub sentiment: Sentiment,
    pub created_at: NaiveDateTime,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    #[serde(rename = "_id")]
    pub favorite_id: Uuid,
    pub user_id: String,
    #[serde(deserialize_with = "movie_id::deserialize")]
    pub movie_id: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteMovie {
    #[serde(flatten)]
    pub movie: Movie,
    pub favorite_id: Uuid,
    pub favorited_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FavoriteCheck {
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl SentimentDistribution {
    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailySeries {
    pub dates: Vec<String>,
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub months: Vec<String>,
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub word: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalytics {
    pub sentiment_distribution: SentimentDistribution,
    pub review_trend: DailySeries,
    pub keywords: Vec<KeywordWeight>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub ratings: Vec<u8>,
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenreDistribution {
    pub genres: Vec<String>,
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieAnalytics {
    pub rating_distribution: RatingDistribution,
    pub genre_distribution: GenreDistribution,
    pub release_trend: MonthlySeries,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBehaviors {
    pub reviews: u64,
    pub favorites: u64,
    pub total_users: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnalytics {
    pub activity_data: DailySeries,
    pub registration_trend: MonthlySeries,
    pub user_behaviors: UserBehaviors,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_user_without_optional_fields() -> anyhow::Result<()> {
        let user: User = serde_json::from_str(
            r#"{"id":"65f0","username":"alice","email":"alice@example.com","is_admin":true}"#,
        )?;
        assert!(user.is_admin);
        assert_eq!(user.avatar, None);
        assert_eq!(user.created_at, None);
        Ok(())
    }

    #[test]
    fn test_profile_without_id() -> anyhow::Result<()> {
        let user: User =
            serde_json::from_str(r#"{"username":"alice","email":"a@x.io","is_admin":false}"#)?;
        assert_eq!(user.username, "alice");
        assert!(user.id.is_empty());
        assert!(!user.is_admin);

        let user: User = serde_json::from_str(
            r#"{"_id":"65f0","username":"bob","email":"b@x.io","is_admin":true}"#,
        )?;
        assert_eq!(user.id, "65f0");
        Ok(())
    }

    #[test]
    fn test_favorites_with_integer_movie_id() -> anyhow::Result<()> {
        let favorites: Vec<FavoriteMovie> = serde_json::from_str(
            r#"[{
                "_id": "6650a1",
                "movie_id": 7,
                "title": "Spirited Away",
                "genre": "Animation;Fantasy",
                "description": "",
                "url_film": "https://movies.example/7",
                "img": {"type": "url", "content": "https://img.example/7.jpg"},
                "source": "douban",
                "favorite_id": "0d8f3a52-8a4e-4d6f-9a57-3c1f2b7e9e10",
                "favorited_at": "2024-05-01T10:15:30.123000"
            }]"#,
        )?;
        assert_eq!(favorites[0].movie.movie_id, "7");

        let movie: Movie = serde_json::from_str(
            r#"{"movie_id":"12","title":"T","genre":"Drama","description":"","url_film":"",
                "img":{"type":"url","content":""},"source":"imdb"}"#,
        )?;
        assert_eq!(movie.movie_id, "12");
        Ok(())
    }

    #[test]
    fn test_favorite_record_from_add() -> anyhow::Result<()> {
        let record: FavoriteRecord = serde_json::from_str(
            r#"{"_id":"0d8f3a52-8a4e-4d6f-9a57-3c1f2b7e9e10","user_id":"u1","movie_id":42,
                "created_at":"2024-05-01T10:15:30"}"#,
        )?;
        assert_eq!(record.movie_id, "42");
        Ok(())
    }

    #[test]
    fn test_movie_genres_split() {
        let movie = Movie {
            movie_id: "1".to_owned(),
            title: "Title".to_owned(),
            genre: "Drama; Crime;".to_owned(),
            description: String::new(),
            url_film: String::new(),
            img: MovieImage {
                kind: "url".to_owned(),
                content: String::new(),
            },
            source: String::new(),
        };
        assert_eq!(movie.genres().collect::<Vec<_>>(), vec!["Drama", "Crime"]);
    }

    #[test]
    fn test_sentiment_parsing() -> anyhow::Result<()> {
        assert_eq!(Sentiment::from_str("Positive")?, Sentiment::Positive);
        assert_eq!(Sentiment::Negative.as_ref(), "negative");
        let parsed: Sentiment = serde_json::from_str("\"neutral\"")?;
        assert_eq!(parsed, Sentiment::Neutral);
        Ok(())
    }

    #[test]
    fn test_review_analytics_camel_case() -> anyhow::Result<()> {
        let analytics: ReviewAnalytics = serde_json::from_str(
            r#"{
                "sentimentDistribution": {"positive": 3, "neutral": 1, "negative": 2},
                "reviewTrend": {"dates": ["2024-05-01"], "counts": [6]},
                "keywords": [{"word": "great", "weight": 12.5}]
            }"#,
        )?;
        assert_eq!(analytics.sentiment_distribution.total(), 6);
        assert_eq!(analytics.keywords[0].word, "great");
        Ok(())
    }
}

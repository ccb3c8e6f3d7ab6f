use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::User;

use crate::error::PersistedStateError;
use crate::storage::{KeyValueStorage, FAVORITES_KEY, TOKEN_KEY, USER_KEY};

/// The two facts about a session that access control depends on.
pub trait SessionFlags {
    fn is_logged_in(&self) -> bool;
    fn is_admin(&self) -> bool;
}

/// Authentication token, current user and favorite movie ids, mirrored into
/// a [`KeyValueStorage`] on every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore<S> {
    storage: S,
    token: String,
    user: Option<User>,
    favorites: Vec<String>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Builds the session from whatever `storage` holds. Missing, unreadable
    /// or malformed entries fall back to the logged-out defaults.
    pub fn hydrate(storage: S) -> Self {
        let token = match storage.get(TOKEN_KEY) {
            Ok(token) => token.unwrap_or_default(),
            Err(error) => {
                log::warn!("Fail to read persisted token, using empty session. Error={error}");
                String::new()
            }
        };

        let user = read_json::<Option<User>>(&storage, USER_KEY)
            .unwrap_or_else(|error| {
                log::warn!("Discarding persisted user. Error={error}");
                None
            })
            .flatten();

        let mut favorites: Vec<String> = Vec::new();
        let persisted = read_json::<Vec<String>>(&storage, FAVORITES_KEY).unwrap_or_else(|error| {
            log::warn!("Discarding persisted favorites. Error={error}");
            None
        });
        for movie_id in persisted.unwrap_or_default() {
            if !favorites.contains(&movie_id) {
                favorites.push(movie_id);
            }
        }

        log::debug!(
            "Session hydrated, logged={logged}, favorites={count}",
            logged = !token.is_empty(),
            count = favorites.len()
        );

        Self {
            storage,
            token,
            user,
            favorites,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.favorites.iter().any(|id| id == movie_id)
    }

    /// `Authorization` header value for API calls, when a token is held.
    pub fn authorization_header(&self) -> Option<String> {
        if self.token.is_empty() {
            None
        } else {
            Some(format!("Bearer {}", self.token))
        }
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
        self.persist(TOKEN_KEY, &self.token);
    }

    pub fn set_user(&mut self, user: User) {
        self.persist_json(USER_KEY, &user);
        log::debug!("Session user set, username={}", user.username);
        self.user = Some(user);
    }

    pub fn login(&mut self, token: impl Into<String>, user: User) {
        self.set_token(token);
        self.set_user(user);
    }

    /// Returns `true` when the id was not already a favorite.
    pub fn add_to_favorites(&mut self, movie_id: impl Into<String>) -> bool {
        let movie_id = movie_id.into();
        if self.is_favorite(&movie_id) {
            return false;
        }
        self.favorites.push(movie_id);
        self.persist_favorites();
        true
    }

    /// Returns `true` when the id was a favorite.
    pub fn remove_from_favorites(&mut self, movie_id: &str) -> bool {
        match self.favorites.iter().position(|id| id == movie_id) {
            Some(index) => {
                self.favorites.remove(index);
                self.persist_favorites();
                true
            }
            None => false,
        }
    }

    /// Flips membership of `movie_id` and returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, movie_id: &str) -> bool {
        if self.remove_from_favorites(movie_id) {
            false
        } else {
            self.add_to_favorites(movie_id)
        }
    }

    /// Undoes an optimistic favorite change that the backend rejected, but only
    /// while membership of `movie_id` still equals `applied`. A later toggle of
    /// the same movie wins. Returns `true` when the change was undone.
    pub fn revert_favorite(&mut self, movie_id: &str, applied: bool) -> bool {
        if self.is_favorite(movie_id) != applied {
            return false;
        }
        if applied {
            self.remove_from_favorites(movie_id)
        } else {
            self.add_to_favorites(movie_id)
        }
    }

    /// Replaces the favorites with `movie_ids`, e.g. the list returned by the
    /// favorites endpoint. Storage is only written when the result differs.
    pub fn replace_favorites<I>(&mut self, movie_ids: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut favorites: Vec<String> = Vec::new();
        for movie_id in movie_ids.into_iter().map(Into::into) {
            if !favorites.contains(&movie_id) {
                favorites.push(movie_id);
            }
        }
        if favorites != self.favorites {
            self.favorites = favorites;
            self.persist_favorites();
        }
    }

    pub fn logout(&mut self) {
        self.token.clear();
        self.user = None;
        self.favorites.clear();
        for key in [TOKEN_KEY, USER_KEY, FAVORITES_KEY] {
            if let Err(error) = self.storage.remove(key) {
                log::warn!("Fail to remove persisted session entry, key={key}, error={error}");
            }
        }
        log::info!("Session cleared");
    }

    fn persist_favorites(&self) {
        self.persist_json(FAVORITES_KEY, &self.favorites);
    }

    fn persist_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.persist(key, &raw),
            Err(error) => log::warn!("Fail to serialize session entry, key={key}, error={error}"),
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(error) = self.storage.set(key, value) {
            log::warn!("Fail to persist session entry, key={key}, error={error}");
        }
    }
}

impl<S: KeyValueStorage> SessionFlags for SessionStore<S> {
    fn is_logged_in(&self) -> bool {
        !self.token.is_empty()
    }

    fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }
}

fn read_json<T: DeserializeOwned>(
    storage: &impl KeyValueStorage,
    key: &'static str,
) -> Result<Option<T>, PersistedStateError> {
    let raw = storage
        .get(key)
        .map_err(|source| PersistedStateError::Unreadable { key, source })?;
    match raw {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| PersistedStateError::Malformed { key, source }),
        None => Ok(None),
    }
}

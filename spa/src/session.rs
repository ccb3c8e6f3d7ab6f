use std::ops::Deref;
use std::rc::Rc;

use client_core::SessionStore;
use shared::User;
use yew::prelude::*;

use crate::browser_storage::BrowserStorage;

pub type BrowserSession = SessionStore<BrowserStorage>;

/// Yew-side wrapper around the session store: every action produces a new
/// state so components holding the context re-render.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    store: BrowserSession,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Login { token: String, user: User },
    SetUser(User),
    AddFavorite(String),
    RemoveFavorite(String),
    RevertFavorite { movie_id: String, applied: bool },
    ReplaceFavorites(Vec<String>),
    Logout,
}

impl SessionState {
    pub fn hydrate() -> Self {
        Self {
            store: SessionStore::hydrate(BrowserStorage::open()),
        }
    }
}

impl Deref for SessionState {
    type Target = BrowserSession;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.store.clone();
        match action {
            SessionAction::Login { token, user } => {
                log::info!("User login successful, username={}", user.username);
                store.login(token, user);
            }
            SessionAction::SetUser(user) => store.set_user(user),
            SessionAction::AddFavorite(movie_id) => {
                if !store.add_to_favorites(movie_id) {
                    return self;
                }
            }
            SessionAction::RemoveFavorite(movie_id) => {
                if !store.remove_from_favorites(&movie_id) {
                    return self;
                }
            }
            SessionAction::RevertFavorite { movie_id, applied } => {
                if !store.revert_favorite(&movie_id, applied) {
                    return self;
                }
            }
            SessionAction::ReplaceFavorites(movie_ids) => store.replace_favorites(movie_ids),
            SessionAction::Logout => {
                log::info!("User logged out");
                store.logout();
            }
        }
        Rc::new(Self { store })
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("session context is provided by App")
}

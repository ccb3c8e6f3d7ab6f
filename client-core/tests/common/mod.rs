#![allow(dead_code)]

use std::cell::Cell;

use client_core::{
    MemoryStorage, ProgressIndicator, RouteAccess, RouteDescriptor, RouteTable, SessionStore,
};
use shared::User;

pub const HOME: &str = "movie_list";
pub const LOGIN: &str = "login";

pub fn user(is_admin: bool) -> User {
    User {
        id: "65f1c2".to_owned(),
        username: if is_admin { "admin" } else { "alice" }.to_owned(),
        email: "someone@example.com".to_owned(),
        is_admin,
        avatar: None,
        created_at: None,
    }
}

/// Fresh store over empty memory storage, plus a handle on that storage.
pub fn empty_store() -> (SessionStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (SessionStore::hydrate(storage.clone()), storage)
}

pub fn logged_in_store(is_admin: bool) -> (SessionStore<MemoryStorage>, MemoryStorage) {
    let (mut store, storage) = empty_store();
    store.login("abc", user(is_admin));
    (store, storage)
}

pub fn route_table() -> anyhow::Result<RouteTable> {
    let routes = vec![
        RouteDescriptor::new(HOME, "/", RouteAccess::public()),
        RouteDescriptor::new("movie_detail", "/movie/:id", RouteAccess::public()),
        RouteDescriptor::new(LOGIN, "/login", RouteAccess::public()),
        RouteDescriptor::new("favorites", "/favorites", RouteAccess::authenticated()),
        RouteDescriptor::new("analysis", "/analysis", RouteAccess::admin()),
        RouteDescriptor::new("admin", "/admin", RouteAccess::admin()),
        RouteDescriptor::new("admin_users", "/admin/users", RouteAccess::default())
            .child_of("admin"),
    ];
    Ok(RouteTable::new(routes, LOGIN, HOME)?)
}

#[derive(Debug, Default)]
pub struct CountingProgress {
    pub started: Cell<u32>,
    pub finished: Cell<u32>,
}

impl ProgressIndicator for CountingProgress {
    fn start(&self) {
        self.started.set(self.started.get() + 1);
    }

    fn done(&self) {
        self.finished.set(self.finished.get() + 1);
    }
}

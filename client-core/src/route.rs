use std::collections::HashMap;

use crate::error::RouteConfigError;

/// Access requirements declared on a route. Both flags default to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteAccess {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteAccess {
    pub const fn public() -> Self {
        Self {
            requires_auth: false,
            requires_admin: false,
        }
    }

    pub const fn authenticated() -> Self {
        Self {
            requires_auth: true,
            requires_admin: false,
        }
    }

    pub const fn admin() -> Self {
        Self {
            requires_auth: true,
            requires_admin: true,
        }
    }

    fn merge(self, other: RouteAccess) -> Self {
        Self {
            requires_auth: self.requires_auth || other.requires_auth,
            requires_admin: self.requires_admin || other.requires_admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub parent: Option<&'static str>,
    pub access: RouteAccess,
}

impl RouteDescriptor {
    pub const fn new(name: &'static str, path: &'static str, access: RouteAccess) -> Self {
        Self {
            name,
            path,
            parent: None,
            access,
        }
    }

    /// Nests this route under `parent`, inheriting its access flags.
    pub const fn child_of(mut self, parent: &'static str) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Validated, read-only set of routes.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    index: HashMap<&'static str, usize>,
    login: &'static str,
    home: &'static str,
}

impl RouteTable {
    pub fn new(
        routes: Vec<RouteDescriptor>,
        login: &'static str,
        home: &'static str,
    ) -> Result<Self, RouteConfigError> {
        let mut index = HashMap::with_capacity(routes.len());
        for (position, route) in routes.iter().enumerate() {
            if index.insert(route.name, position).is_some() {
                return Err(RouteConfigError::DuplicateRoute(route.name));
            }
        }

        for route in &routes {
            if let Some(parent) = route.parent {
                if !index.contains_key(parent) {
                    return Err(RouteConfigError::UnknownParent {
                        route: route.name,
                        parent,
                    });
                }
            }
        }

        for route in &routes {
            let mut current = route.parent;
            let mut depth = 0;
            while let Some(parent) = current {
                depth += 1;
                if parent == route.name || depth > routes.len() {
                    return Err(RouteConfigError::ParentCycle(route.name));
                }
                current = routes[index[parent]].parent;
            }
        }

        for required in [login, home] {
            if !index.contains_key(required) {
                return Err(RouteConfigError::MissingRoute(required));
            }
        }

        let table = Self {
            routes,
            index,
            login,
            home,
        };

        if table.effective_access(login).requires_auth {
            return Err(RouteConfigError::GuardedLoginRoute(login));
        }
        for route in &table.routes {
            let access = table.effective_access(route.name);
            if access.requires_admin && !access.requires_auth {
                return Err(RouteConfigError::AdminWithoutAuth(route.name));
            }
        }

        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.index.get(name).map(|position| &self.routes[*position])
    }

    pub fn path_of(&self, name: &str) -> Option<&'static str> {
        self.get(name).map(|route| route.path)
    }

    pub fn login_route(&self) -> &RouteDescriptor {
        &self.routes[self.index[self.login]]
    }

    pub fn home_route(&self) -> &RouteDescriptor {
        &self.routes[self.index[self.home]]
    }

    /// The route followed by its ancestors, innermost first.
    pub fn matched_chain<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a RouteDescriptor> {
        let mut next = self.get(name);
        std::iter::from_fn(move || {
            let current = next?;
            next = current.parent.and_then(|parent| self.get(parent));
            Some(current)
        })
    }

    /// Access flags merged over the whole matched chain. Unknown routes carry
    /// no restriction.
    pub fn effective_access(&self, name: &str) -> RouteAccess {
        self.matched_chain(name)
            .fold(RouteAccess::default(), |access, route| {
                access.merge(route.access)
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }
}

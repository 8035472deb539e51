// crates/social-api-core/src/routes.rs
// ============================================================================
// Module: API Routes
// Description: Collection routes exposed by the social media service.
// Purpose: Keep endpoint strings in one lookup table.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Collection routes of the service and the `{collection}/{id}` item form.

use std::fmt;

/// Collection routes of the service under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiRoute {
    /// `/users`
    Users,
    /// `/posts`
    Posts,
    /// `/auth`
    Auth,
}

impl ApiRoute {
    /// All known routes.
    pub const ALL: [Self; 3] = [Self::Users, Self::Posts, Self::Auth];

    /// Returns the collection path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "/users",
            Self::Posts => "/posts",
            Self::Auth => "/auth",
        }
    }

    /// Returns the item path `{collection}/{id}`.
    #[must_use]
    pub fn item(self, id: i64) -> String {
        format!("{}/{id}", self.as_str())
    }

    /// Splits a request path into its route and optional item segment.
    ///
    /// Query strings and a trailing slash are ignored. Paths with more than
    /// one segment below the collection return `None`.
    #[must_use]
    pub fn match_path(path: &str) -> Option<(Self, Option<&str>)> {
        let path = path.split('?').next().unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);
        Self::ALL.into_iter().find_map(|route| {
            let rest = path.strip_prefix(route.as_str())?;
            if rest.is_empty() {
                return Some((route, None));
            }
            let segment = rest.strip_prefix('/')?;
            if segment.is_empty() || segment.contains('/') {
                return None;
            }
            Some((route, Some(segment)))
        })
    }
}

impl fmt::Display for ApiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

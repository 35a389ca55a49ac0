//! Route tokens - the path segments pages are generated under.

use serde::{Deserialize, Serialize};
use show_records::{is_valid_show_id, WrestlerId};
use std::str::FromStr;

use crate::error::RouteError;

/// Route of one show page, rendered as `[id1,id2,...]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowRoute {
    pub ids: Vec<String>,
}

impl ShowRoute {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// The bracketed, comma-joined token.
    pub fn token(&self) -> String {
        format!("[{}]", self.ids.join(","))
    }

    /// Decode a token back into the exact id sequence.
    pub fn parse(token: &str) -> Result<Self, RouteError> {
        let inner = token
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .ok_or_else(|| RouteError::MissingBrackets(token.to_string()))?;
        if inner.is_empty() {
            return Err(RouteError::EmptyIds(token.to_string()));
        }

        let ids = inner
            .split(',')
            .map(|id| {
                if is_valid_show_id(id) {
                    Ok(id.to_string())
                } else {
                    Err(RouteError::InvalidShowId {
                        token: token.to_string(),
                        id: id.to_string(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ids })
    }
}

impl std::fmt::Display for ShowRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.ids.join(","))
    }
}

impl FromStr for ShowRoute {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Decode a wrestler route token.
///
/// Only the canonical decimal form is accepted, so every id has exactly one
/// path: `+7` and `007` are rejected.
pub fn parse_wrestler_token(token: &str) -> Result<WrestlerId, RouteError> {
    let invalid = || RouteError::InvalidWrestlerId(token.to_string());
    let id: WrestlerId = token.parse().map_err(|_| invalid())?;
    if id.to_string() != token {
        return Err(invalid());
    }
    Ok(id)
}

/// A page to build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Show(ShowRoute),
    Wrestler(WrestlerId),
}

impl Route {
    pub const SHOWS_PREFIX: &'static str = "/shows/";
    pub const WRESTLERS_PREFIX: &'static str = "/wrestlers/";

    /// The token alone, without the section prefix.
    pub fn token(&self) -> String {
        match self {
            Route::Show(route) => route.token(),
            Route::Wrestler(id) => id.to_string(),
        }
    }

    /// The full page path.
    pub fn path(&self) -> String {
        match self {
            Route::Show(route) => format!("{}{}", Self::SHOWS_PREFIX, route.token()),
            Route::Wrestler(id) => format!("{}{}", Self::WRESTLERS_PREFIX, id),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(token) = s.strip_prefix(Self::SHOWS_PREFIX) {
            ShowRoute::parse(token).map(Route::Show)
        } else if let Some(token) = s.strip_prefix(Self::WRESTLERS_PREFIX) {
            parse_wrestler_token(token).map(Route::Wrestler)
        } else {
            Err(RouteError::UnknownPath(s.to_string()))
        }
    }
}

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::error::RouteError;

/// Path of the home screen.
pub const HOME_ROUTE: &str = "home";

/// Template of the result screen path; `{listData}` is the encoded roster.
pub const RESULT_ROUTE: &str = "resultContent/?listData={listData}";

/// Name of the single query parameter carried by [`RESULT_ROUTE`].
pub const LIST_DATA: &str = "listData";

static RESULT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^resultContent/?(?:\?(?P<query>.*))?$").expect("valid hardcoded regex")
});

/// A navigation destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The roster form.
    Home,
    /// The result screen with its raw, still-encoded `listData` value.
    Result { list_data: String },
}

impl Route {
    /// Builds a result route from an already-encoded parameter value.
    pub fn result(encoded: impl Into<String>) -> Self {
        Self::Result {
            list_data: encoded.into(),
        }
    }

    /// Formats the route as a path string.
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => HOME_ROUTE.to_string(),
            Self::Result { list_data } => RESULT_ROUTE.replace("{listData}", list_data),
        }
    }

    /// Parses a path string into a route.
    ///
    /// A result path without a `listData` parameter yields an empty value.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        if path == HOME_ROUTE {
            return Ok(Self::Home);
        }
        let caps = RESULT_RE
            .captures(path)
            .ok_or_else(|| RouteError::UnknownRoute(path.to_string()))?;
        let list_data = caps
            .name("query")
            .and_then(|query| query_param(query.as_str(), LIST_DATA))
            .unwrap_or_default();
        Ok(Self::Result {
            list_data: list_data.to_string(),
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Returns the raw value of the first `key` pair in a query string.
fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

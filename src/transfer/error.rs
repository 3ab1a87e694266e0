/// Errors that can occur while resolving a navigation path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The path matches no known screen.
    #[error("unknown route: {0}")]
    UnknownRoute(String),
}

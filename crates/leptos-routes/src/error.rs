//! Routing Errors

/// Result type for route table construction and resolution
pub type RouteResult<T> = Result<T, RouteError>;

/// Errors raised while building or resolving a route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Pattern string could not be parsed
    InvalidPattern(String),
    /// A route can never match because an earlier route claims all its paths
    Shadowed { route: String, by: String },
    /// No route matched the path
    NoMatch(String),
    /// Redirect chain exceeded the hop limit
    RedirectLoop(String),
    /// Redirect template references a parameter the source pattern does not capture
    MissingParam { template: String, param: String },
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::InvalidPattern(p) => write!(f, "Invalid route pattern: {}", p),
            RouteError::Shadowed { route, by } => {
                write!(f, "Route {} is unreachable: shadowed by {}", route, by)
            }
            RouteError::NoMatch(path) => write!(f, "No route matches {}", path),
            RouteError::RedirectLoop(path) => write!(f, "Too many redirects starting at {}", path),
            RouteError::MissingParam { template, param } => {
                write!(f, "Redirect {} needs parameter :{}", template, param)
            }
        }
    }
}

impl std::error::Error for RouteError {}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("route contains no steps")]
    EmptyRoute,

    #[error("leg {0} has no steps (leg indices must cover 0..n contiguously)")]
    MissingLeg(usize),
}

pub type RouteResult<T> = Result<T, RouteError>;

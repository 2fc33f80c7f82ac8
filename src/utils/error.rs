use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("record #{0} has non-numeric cost {1}")]
    NonNumericCost(usize, String),
    #[error("no path from {0} to {1}")]
    NoPath(String, String),
    #[error("node {0} is not in the topology")]
    UnknownNode(String),
    #[error("node {0} and node {1} share no enabled link")]
    NotAdjacent(String, String),
    #[error("failed to access {path}")]
    Io {
        path: String,
        #[source]
        cause: std::io::Error,
    },
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors local to one demand; the rest of the run can go on.
    pub fn is_per_demand(&self) -> bool {
        matches!(self, Error::NoPath(..) | Error::UnknownNode(_))
    }
    pub fn io(path: &str, cause: std::io::Error) -> Self {
        Error::Io { path: path.to_owned(), cause }
    }
}

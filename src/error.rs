#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to initialize the random source: {0}")]
    Entropy(#[from] rand::Error),
    #[error("Invalid job count: at least one worker stream is required")]
    InvalidJobs,
}

pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{} is out of date", path.display())]
    Stale { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;

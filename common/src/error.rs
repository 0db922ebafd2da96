use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GreetError {
    #[error("{0}")]
    Write(#[from] io::Error),
}

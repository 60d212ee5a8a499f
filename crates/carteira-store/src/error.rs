//! Error types for carteira-store

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Syntax error in {location}: {message}")]
    SyntaxError { location: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

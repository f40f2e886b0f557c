// glloadgen/src/error.rs
//
//! Various errors that methods can produce.

use std::io;

/// Various errors that methods can produce.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the header or writing the generated artifact failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The export marker or calling convention marker did not produce a valid pattern.
    #[error("invalid declaration pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// A symbol name is too short, lacks the API prefix, or contains non-identifier characters.
    ///
    /// Descriptor derivation strips a fixed two-character prefix, so such names are rejected
    /// rather than guessed at.
    #[error("invalid symbol name `{0}`")]
    InvalidSymbolName(String),
    /// The API prefix is not two identifier characters, or the library prefix is not a C
    /// identifier.
    #[error("invalid prefix `{0}`")]
    InvalidPrefix(String),
    /// The system OpenGL library couldn't be located.
    #[error("the system OpenGL library couldn't be located")]
    NoGLLibraryFound,
    /// Looking up an OpenGL function address failed.
    #[error("OpenGL function `{0}` was not found")]
    GLFunctionNotFound(&'static str),
    /// The loaded library reported an OpenGL version below the supported floor.
    #[error("unsupported OpenGL version {major}.{minor}")]
    UnsupportedGLVersion {
        /// The reported major version.
        major: i32,
        /// The reported minor version.
        minor: i32,
    },
}

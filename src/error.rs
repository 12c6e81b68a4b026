use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("[line {line}] Error: {message}")]
    Lexical { line: usize, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn lexical<S: Into<String>>(line: usize, message: S) -> Error {
        Error::Lexical { line, message: message.into() }
    }

    /// The source line of a lexical error, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Lexical { line, .. } => Some(*line),
            Error::Io(_) => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Error::Lexical { message, .. } => message.clone(),
            Error::Io(e) => e.to_string(),
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, Error::Lexical { .. })
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> std::io::Error {
        match e {
            Error::Io(inner) => inner,
            e => std::io::Error::new(std::io::ErrorKind::Other, e),
        }
    }
}

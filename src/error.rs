use thiserror::Error;

/// The only text a user ever sees when generation goes wrong.
pub const GENERIC_ERROR: &str = "Erreur lors de la génération de la liste de courses.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// No usable response: connection, status or body read failure.
    #[error("Request failed: {0}")]
    Transport(String),

    /// A response arrived but did not have the expected shape.
    #[error("Parse Error: {0}")]
    Decode(String),
}

impl GenerationError {
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("unknown tag: {0}")]
    Unknown(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
}

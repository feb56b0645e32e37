pub mod annotate;
pub mod cli;
pub mod comments;
pub mod config;
pub mod status;
pub mod store;

#[derive(Debug)]
pub enum EvnoteError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Config(String),
}

impl std::fmt::Display for EvnoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvnoteError::Io(e) => write!(f, "io: {e}"),
            EvnoteError::Json(e) => write!(f, "json: {e}"),
            EvnoteError::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl From<std::io::Error> for EvnoteError {
    fn from(e: std::io::Error) -> Self {
        EvnoteError::Io(e)
    }
}

impl From<serde_json::Error> for EvnoteError {
    fn from(e: serde_json::Error) -> Self {
        EvnoteError::Json(e)
    }
}

use derive_more::{Display, Error, From};

/// Errors surfaced by the application shell. The game logic itself never fails.
#[derive(Debug, Display, Error, From)]
pub enum QuizError {
    #[display("i/o error: {_0}")]
    Io(std::io::Error),
    #[display("settings error: {_0}")]
    Json(serde_json::Error),
    #[display("content table {table} is malformed: {source}")]
    #[from(skip)]
    Content {
        table: &'static str,
        source: serde_json::Error,
    },
    #[display("content table {_0} is missing")]
    #[from(skip)]
    MissingContent(#[error(not(source))] &'static str),
}

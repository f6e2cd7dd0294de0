use axum::http::StatusCode;

/// Errors raised by the habit model and its seed source.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HabitError {
    /// Two records in one collection share an id.
    #[error("duplicate habit id \"{0}\"")]
    DuplicateId(String),

    /// A record claims more repetitions today than its target allows.
    #[error("habit \"{id}\" has progress {current} above its target {total}")]
    ProgressOutOfRange { id: String, current: u32, total: u32 },

    /// A category or filter key outside of `all|health|study|work|growth`.
    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),

    #[error("failed to read seed file: {0}")]
    SeedRead(String),

    #[error("failed to parse seed file: {0}")]
    SeedParse(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<HabitError> for AppError {
    fn from(err: HabitError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;

#[derive(thiserror::Error, Debug)]
pub enum JobTrackerError {
    #[error("You must set the 'MONGODB_URI' environment variable to the database connection string")]
    MissingConnectionString {},

    #[error("Failed to read config file, {}", source)]
    ReadConfigFile { source: std::io::Error },

    #[error("Failed to parse config file, {}", source)]
    ParseConfigFile { source: toml::de::Error },

    #[error("Failed to connect to the database, {}", source)]
    Connect { source: mongodb::error::Error },

    #[error("Failed to ping the database, {}", source)]
    Ping { source: mongodb::error::Error },

    #[error("Invalid job id '{}'", id)]
    InvalidId { id: String },

    #[error("Invalid limit '{}', expected a non-negative integer", value)]
    InvalidLimit { value: String },

    #[error("Invalid request body, {}", reason)]
    InvalidBody { reason: String },

    #[error("Job {} not found", id)]
    JobNotFound { id: String },

    #[error("Database operation failed, {}", source)]
    Store { source: mongodb::error::Error },

    #[error("Database operation timed out after {}s", seconds)]
    StoreTimeout { seconds: u64 },
}

impl actix_web::error::ResponseError for JobTrackerError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            JobTrackerError::InvalidId { .. }
            | JobTrackerError::InvalidLimit { .. }
            | JobTrackerError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            JobTrackerError::JobNotFound { .. } => StatusCode::NOT_FOUND,
            JobTrackerError::StoreTimeout { .. } => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

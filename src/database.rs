use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::time::Duration;

use crate::errors::JobTrackerError;

pub const CONNECTION_STRING_VAR: &str = "MONGODB_URI";

pub struct Database {
    client: Client,
    name: String,
}

impl Database {
    /// Opens the client and pings the server, any failure is returned to the
    /// caller which is expected to abort startup.
    pub async fn connect(
        uri: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<Self, JobTrackerError> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|source| JobTrackerError::Connect { source })?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_owned());
        options.server_selection_timeout = Some(timeout);

        let client =
            Client::with_options(options).map_err(|source| JobTrackerError::Connect { source })?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|source| JobTrackerError::Ping { source })?;

        info!("Connected to the database");

        Ok(Self {
            client,
            name: name.to_owned(),
        })
    }

    pub fn handle(&self) -> mongodb::Database {
        self.client.database(&self.name)
    }

    pub async fn disconnect(self) {
        self.client.shutdown().await;
        debug!("Disconnected from database");
    }
}

pub fn connection_string() -> Result<String, JobTrackerError> {
    read_connection_string(std::env::var(CONNECTION_STRING_VAR).ok())
}

fn read_connection_string(value: Option<String>) -> Result<String, JobTrackerError> {
    match value {
        Some(uri) if !uri.trim().is_empty() => Ok(uri),
        _ => Err(JobTrackerError::MissingConnectionString {}),
    }
}

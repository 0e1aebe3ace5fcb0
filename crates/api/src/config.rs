use onboard_db::repositories::UpdateAtomicity;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development against the
/// Vite dev server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://db.sqlite3`).
    pub database_url: String,
    /// The single origin allowed by CORS.
    pub cors_origin: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Transaction granularity for multi-field profile updates.
    pub update_atomicity: UpdateAtomicity,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `DATABASE_URL`         | `sqlite://db.sqlite3`      |
    /// | `CORS_ORIGIN`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `UPDATE_ATOMICITY`     | `per_field`                |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://db.sqlite3".into());

        let cors_origin = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .trim()
            .to_string();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let update_atomicity: UpdateAtomicity = std::env::var("UPDATE_ATOMICITY")
            .unwrap_or_else(|_| UpdateAtomicity::PerField.as_str().into())
            .parse()
            .unwrap_or_else(|e| panic!("UPDATE_ATOMICITY: {e}"));

        Self {
            host,
            port,
            database_url,
            cors_origin,
            request_timeout_secs,
            update_atomicity,
        }
    }
}

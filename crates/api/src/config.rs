/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// MongoDB connection string.
    pub database_url: String,
    /// Database name within the MongoDB deployment.
    pub database_name: String,
    /// Secret used to sign session cookies.
    pub session_secret: String,
    /// Directory where uploaded listing images are stored.
    pub upload_dir: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `HOST`                 | `0.0.0.0`                     |
    /// | `PORT`                 | `3000`                        |
    /// | `MONGODB_URL`          | `mongodb://127.0.0.1:27017`   |
    /// | `MONGODB_DB`           | `wanderstay`                  |
    /// | `SESSION_SECRET`       | `wanderstay-dev-secret`       |
    /// | `UPLOAD_DIR`           | `uploads`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://127.0.0.1:27017".into());

        let database_name = std::env::var("MONGODB_DB").unwrap_or_else(|_| "wanderstay".into());

        let session_secret =
            std::env::var("SESSION_SECRET").unwrap_or_else(|_| "wanderstay-dev-secret".into());

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            database_name,
            session_secret,
            upload_dir,
            request_timeout_secs,
        }
    }
}

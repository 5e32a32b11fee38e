//! Spotify Daylist Service Library
//!
//! This library provides a small local web service that logs into Spotify via
//! OAuth 2.0, locates the user's algorithmically generated "daylist" playlist
//! and returns its tracks as JSON.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and the session gate middleware
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for Spotify communication
//! - `management` - Session handle and pending login bookkeeping
//! - `server` - Router construction and the HTTP server loop
//! - `spotify` - Spotify Web API client, OAuth helpers, daylist lookup
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use daylist::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> daylist::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config, true).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use daylist::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Console logging. Each macro takes the same arguments as `println!` and
// prefixes the line with a colored status marker.

/// `[o]` in blue: startup and progress notes.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// `[✓]` in green: a completed login.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// `[!]` in red on stderr, then exits with status 1.
///
/// Only for startup failures in `main`; handlers report upstream problems
/// with [`warning!`] and keep serving.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// `[!]` in yellow on stderr: a failed upstream call or login attempt.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

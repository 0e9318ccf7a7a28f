pub mod cli;
pub mod config;
pub mod services;

use cli::Mode;
use config::AppConfig;
use services::{GenerateError, GeneratedFile};

/// Load .env from the working directory or its parents.
///
/// Returns the file that was loaded. Runs before logging is set up so
/// `RUST_LOG` from the file takes effect; the caller logs the outcome.
pub fn load_dotenv() -> Option<&'static str> {
    let candidates = [".env", "../.env", "../../.env"];
    candidates
        .into_iter()
        .find(|path| dotenvy::from_filename(path).is_ok())
}

/// Run the generator selected by `mode`.
pub fn run(mode: Mode, config: &AppConfig) -> Result<Vec<GeneratedFile>, GenerateError> {
    match mode {
        Mode::CircleLogo => services::generate_circle_logo_favicons(config),
        Mode::Text => services::generate_text_favicons(config),
    }
}

// Project-wide constants
//
// Centralised here so port numbers and other magic values have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Default bind address (all interfaces, the port the browser client expects)
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:5000";

/// Config directory under the user's home
pub const CONFIG_DIR_NAME: &str = ".brainstorm";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Environment variable carrying the Gemini API key
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Environment variable overriding the listen port
pub const ENV_PORT: &str = "PORT";

/// Environment variable overriding the generation model
pub const ENV_MODEL: &str = "BRAINSTORM_MODEL";

//! Configuration command handler.
//!
//! Prints every setting with the layer it came from (default, file or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "difficulty": {
//!     "value": "medium",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "player_one": {
            "value": config.player_one,
            "source": sources.player_one,
        },
        "player_two": {
            "value": config.player_two,
            "source": sources.player_two,
        },
        "difficulty": {
            "value": config.difficulty,
            "source": sources.difficulty,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ai_delay_ms": {
            "value": config.ai_delay_ms,
            "source": sources.ai_delay_ms,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

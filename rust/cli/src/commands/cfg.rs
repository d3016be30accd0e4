//! Configuration command handler.
//!
//! Prints the resolved configuration as pretty JSON, one entry per setting
//! with its value and where it came from:
//!
//! ```json
//! {
//!   "seed": { "value": null, "source": "default" },
//!   "format": { "value": "text", "source": "default" },
//!   "matches": { "value": 100, "source": "default" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "format": {
            "value": config.format,
            "source": sources.format,
        },
        "matches": {
            "value": config.matches,
            "source": sources.matches,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cfg_writes_pretty_json_with_sources() {
        let mut out = Vec::new();
        handle_cfg_command(&mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        for key in ["seed", "format", "matches"] {
            assert!(json[key].get("value").is_some(), "missing {}", key);
            assert!(json[key]["source"].is_string(), "missing source for {}", key);
        }
        assert!(output.contains("\n  "));
    }
}

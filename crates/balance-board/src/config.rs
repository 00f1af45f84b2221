//! Runtime configuration for the balance board handler.

use serde::{Deserialize, Serialize};

/// Set to a truthy value to hex-dump every handshake block at debug level.
pub const DUMP_HANDSHAKE_ENV: &str = "BALANCE_BOARD_DUMP_HANDSHAKE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Log the raw handshake block before decoding it.
    #[serde(default)]
    pub dump_handshake: bool,
}

impl BoardConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            dump_handshake: std::env::var(DUMP_HANDSHAKE_ENV)
                .ok()
                .as_deref()
                .is_some_and(parse_bool_env),
        }
    }

    pub fn with_dump_handshake(mut self, dump_handshake: bool) -> Self {
        self.dump_handshake = dump_handshake;
        self
    }
}

pub(crate) fn parse_bool_env(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}

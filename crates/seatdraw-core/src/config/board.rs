//! Board task configuration.

use serde::{Deserialize, Serialize};

/// Channel sizing for the board task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Capacity of the outbound event broadcast channel.
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
    /// Capacity of the inbound command channel.
    #[serde(default = "default_command_buffer")]
    pub command_buffer: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            event_buffer: default_event_buffer(),
            command_buffer: default_command_buffer(),
        }
    }
}

fn default_event_buffer() -> usize {
    256
}

fn default_command_buffer() -> usize {
    64
}

use super::*;
use serde::Deserialize;
use serde::Serialize;

/// One self-delimited command/payload unit.
///
/// Encoded as a single JSON object followed by `\n`. The payload is
/// optional on the wire; clients omit it for `exit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    pub fn new(command: &str, message: impl Into<String>) -> Self {
        Self {
            command: command.to_string(),
            message: Some(message.into()),
        }
    }
    pub fn bare(command: &str) -> Self {
        Self {
            command: command.to_string(),
            message: None,
        }
    }
    /// Payload text, empty when absent.
    pub fn payload(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
    /// JSON text plus the trailing delimiter.
    pub fn encode(&self) -> String {
        let mut line = serde_json::to_string(self).expect("serialize envelope");
        line.push('\n');
        line
    }
    /// Parses one line, with or without its delimiter.
    pub fn decode(line: &str) -> Result<Self, Disconnect> {
        serde_json::from_str(line.trim_end_matches(['\n', '\r']))
            .map_err(|e| Disconnect::Malformed(format!("{}: {:?}", e, line.trim_end())))
    }
}

impl std::fmt::Display for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(m) => write!(f, "{}({:?})", self.command, m),
            None => write!(f, "{}", self.command),
        }
    }
}

//! Advisory records about automatic corrections

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
}

/// Something the merge changed on its own that the user should hear about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    /// False for hints that are only shown once and never stored
    pub persist: bool,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { severity: Severity::Info, message: message.into(), persist: false }
    }
}

pub const SCHEDULE_RESET_MESSAGE: &str = "\"# Division Games\" and \"# Conference Games\" settings were reset because the supplied values did not work.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_wire_shape() {
        let value = serde_json::to_value(Notice::info("hello")).unwrap();
        assert_eq!(value["severity"], "info");
        assert_eq!(value["persist"], false);
    }
}

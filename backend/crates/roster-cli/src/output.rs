use roster_core::{Member, Notice};

use serde::Serialize;

/// JSON printed for every command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    pub members: Vec<Member>,
}

/// Output plus whether the roster operation was accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub output: CommandOutput,
    pub accepted: bool,
}

impl CommandOutcome {
    pub fn accepted(notice: Option<Notice>, members: Vec<Member>) -> Self {
        Self {
            output: CommandOutput { notice, members },
            accepted: true,
        }
    }

    pub fn rejected(notice: Notice, members: Vec<Member>) -> Self {
        Self {
            output: CommandOutput {
                notice: Some(notice),
                members,
            },
            accepted: false,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(&self.output)
        } else {
            serde_json::to_string(&self.output)
        }
    }
}

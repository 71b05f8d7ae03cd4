use std::{fmt, str::FromStr};

use thiserror::Error;

/// Specifies the status of a node's execution. Returned from every
/// `execute()` call and from the tick driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeStatus {
    /// The node needs more calls to `execute()` before it finishes.
    /// It is called again on the next tick, keeping its progress.
    NotDone,
    Success,
    Failure,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseNodeStatusError {
    #[error("string [{0}] didn't match any NodeStatus values")]
    NoMatch(String),
}

impl NodeStatus {
    /// `true` for `Success` and `Failure`, the results after which the
    /// tick driver resets the tree.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotDone => "NOT_DONE",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        };

        write!(f, "{text}")
    }
}

impl FromStr for NodeStatus {
    type Err = ParseNodeStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_DONE" | "NotDone" => Ok(NodeStatus::NotDone),
            "SUCCESS" | "Success" => Ok(NodeStatus::Success),
            "FAILURE" | "Failure" => Ok(NodeStatus::Failure),
            _ => Err(ParseNodeStatusError::NoMatch(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_terminal_statuses_are_completed() {
        assert!(!NodeStatus::NotDone.is_completed());
        assert!(NodeStatus::Success.is_completed());
        assert!(NodeStatus::Failure.is_completed());
    }

    #[test]
    fn display_names_parse_back() {
        for status in [NodeStatus::NotDone, NodeStatus::Success, NodeStatus::Failure] {
            assert_eq!(status.to_string().parse::<NodeStatus>(), Ok(status));
        }
        assert_eq!("NotDone".parse::<NodeStatus>(), Ok(NodeStatus::NotDone));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "RUNNING".parse::<NodeStatus>(),
            Err(ParseNodeStatusError::NoMatch("RUNNING".to_string()))
        );
    }
}

//! Application status lifecycle.
//!
//! A small finite state machine over the status vocabulary. Every status
//! has an entry in the transition table; terminal statuses have an empty
//! one. `waiting` is a re-entrant follow-up state: reachable from an
//! interview stage and able to return to one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Application submitted, nothing heard yet.
    Applied,
    /// An interview has been scheduled.
    Interview,
    /// Actively in the interview process.
    Interviewing,
    /// Waiting on the company after an interview stage.
    Waiting,
    /// Offer received.
    Offer,
    /// Offer accepted. Terminal.
    Accepted,
    /// Application rejected. Terminal.
    Rejected,
    /// Application withdrawn by the candidate. Terminal.
    Withdrawn,
}

/// Request to move an application to a status not reachable from its
/// current one. The application state is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid status transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: JobStatus,
    pub to: JobStatus,
}

/// Failed to parse a status value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown job status: {0:?}")]
pub struct ParseStatusError(pub String);

impl JobStatus {
    /// The full status vocabulary, in lifecycle order.
    pub const ALL: [JobStatus; 8] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Interviewing,
        JobStatus::Waiting,
        JobStatus::Offer,
        JobStatus::Accepted,
        JobStatus::Rejected,
        JobStatus::Withdrawn,
    ];

    /// Statuses reachable from `self` in one transition.
    pub fn valid_transitions(self) -> &'static [JobStatus] {
        use JobStatus::*;
        match self {
            Applied => &[Interview, Rejected, Withdrawn],
            Interview => &[Interviewing, Rejected, Withdrawn],
            Interviewing => &[Waiting, Offer, Rejected, Withdrawn],
            Waiting => &[Interview, Interviewing, Offer, Rejected, Withdrawn],
            Offer => &[Accepted, Rejected, Withdrawn],
            Accepted | Rejected | Withdrawn => &[],
        }
    }

    /// True if no transition leaves this status.
    pub fn is_terminal(self) -> bool {
        self.valid_transitions().is_empty()
    }

    /// Whether `next` is reachable from `self` in one transition.
    pub fn can_transition_to(self, next: JobStatus) -> bool {
        self.valid_transitions().contains(&next)
    }

    /// The canonical lowercase name, as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Interview => "interview",
            JobStatus::Interviewing => "interviewing",
            JobStatus::Waiting => "waiting",
            JobStatus::Offer => "offer",
            JobStatus::Accepted => "accepted",
            JobStatus::Rejected => "rejected",
            JobStatus::Withdrawn => "withdrawn",
        }
    }
}

/// Validate a transition request, leaving it to the caller to persist.
///
/// Returns [`TransitionError`] when `desired` is not in
/// `current.valid_transitions()`; terminal statuses therefore reject
/// every request.
pub fn apply_transition(current: JobStatus, desired: JobStatus) -> Result<(), TransitionError> {
    if current.can_transition_to(desired) {
        Ok(())
    } else {
        Err(TransitionError {
            from: current,
            to: desired,
        })
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applied" => Ok(JobStatus::Applied),
            "interview" => Ok(JobStatus::Interview),
            "interviewing" => Ok(JobStatus::Interviewing),
            "waiting" => Ok(JobStatus::Waiting),
            "offer" => Ok(JobStatus::Offer),
            "accepted" => Ok(JobStatus::Accepted),
            "rejected" => Ok(JobStatus::Rejected),
            "withdrawn" => Ok(JobStatus::Withdrawn),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

// Lets sqlx rows decode status columns through `#[sqlx(try_from = "String")]`.
impl TryFrom<String> for JobStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_total_over_the_vocabulary() {
        for status in JobStatus::ALL {
            // Every entry must itself point at vocabulary members
            for next in status.valid_transitions() {
                assert!(JobStatus::ALL.contains(next));
            }
        }
    }

    #[test]
    fn terminal_statuses_reject_everything() {
        for terminal in [JobStatus::Accepted, JobStatus::Rejected, JobStatus::Withdrawn] {
            assert!(terminal.is_terminal());
            assert!(terminal.valid_transitions().is_empty());
            for next in JobStatus::ALL {
                assert_eq!(
                    apply_transition(terminal, next),
                    Err(TransitionError {
                        from: terminal,
                        to: next
                    })
                );
            }
        }
    }

    #[test]
    fn waiting_is_reentrant() {
        assert!(apply_transition(JobStatus::Waiting, JobStatus::Interview).is_ok());
        assert!(apply_transition(JobStatus::Waiting, JobStatus::Interviewing).is_ok());
        assert!(apply_transition(JobStatus::Waiting, JobStatus::Applied).is_err());
    }

    #[test]
    fn same_status_is_not_a_transition() {
        for status in JobStatus::ALL {
            assert!(apply_transition(status, status).is_err());
        }
    }

    #[test]
    fn offer_path() {
        assert!(apply_transition(JobStatus::Applied, JobStatus::Interview).is_ok());
        assert!(apply_transition(JobStatus::Interview, JobStatus::Interviewing).is_ok());
        assert!(apply_transition(JobStatus::Interviewing, JobStatus::Offer).is_ok());
        assert!(apply_transition(JobStatus::Offer, JobStatus::Accepted).is_ok());
        // Skipping stages is not allowed
        assert!(apply_transition(JobStatus::Applied, JobStatus::Offer).is_err());
    }

    #[test]
    fn parse_and_display_round_trip() {
        for status in JobStatus::ALL {
            assert_eq!(status.as_str().parse::<JobStatus>(), Ok(status));
            assert_eq!(status.to_string(), status.as_str());
        }
        assert!("fired".parse::<JobStatus>().is_err());
        assert!("Applied".parse::<JobStatus>().is_err());
    }
}

use super::new_id;
use crate::domain::value_objects::{
    Address, Email, ProblemAttachments, ProblemDescription, ProblemProtocol, ProblemStatus,
    ProblemType,
};
use chrono::{DateTime, Utc};

/// A problem reported by a resident, tracked by its protocol number.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemReport {
    pub id: String,
    pub protocol: ProblemProtocol,
    pub problem_type: ProblemType,
    pub description: ProblemDescription,
    pub attachments: ProblemAttachments,
    pub status: ProblemStatus,
    pub address: Option<Address>,
    pub reporter_email: Option<Email>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProblemReport {
    /// A new report in the `PENDING` state.
    pub fn file(
        protocol: ProblemProtocol,
        problem_type: ProblemType,
        description: ProblemDescription,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            protocol,
            problem_type,
            description,
            attachments: ProblemAttachments::empty(),
            status: ProblemStatus::Pending,
            address: None,
            reporter_email: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

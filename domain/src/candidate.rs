//! Candidate identity

use crate::core::error::DomainError;
use crate::core::interview_id::InterviewId;
use serde::{Deserialize, Serialize};

/// Decoded identity payload of a candidate link.
///
/// Token decoding happens upstream; only `job_offer_id` reaches the
/// conversation engine (as the interview id).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "id_job_offer", alias = "jobOfferId")]
    pub job_offer_id: Option<String>,
}

impl CandidateProfile {
    /// Parse the JSON payload (`{"name": .., "phone": .., "job_offer_id": ..}`).
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// Name used to label saved answers: the name, else the phone number.
    pub fn label(&self) -> Option<String> {
        [&self.name, &self.phone]
            .into_iter()
            .flatten()
            .map(|value| value.trim())
            .find(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// The interview id for this candidate, if the payload names a job offer.
    pub fn interview_id(&self) -> Result<Option<InterviewId>, DomainError> {
        match self.job_offer_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(id) => InterviewId::new(id).map(Some),
        }
    }
}

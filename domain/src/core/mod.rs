//! Core domain concepts shared across all subdomains.
//!
//! - [`interview_id::InterviewId`] - validated key of one interview (job offer)
//! - [`error::DomainError`] - domain-level errors
//! - [`string`] - log-friendly text helpers

pub mod error;
pub mod interview_id;
pub mod string;

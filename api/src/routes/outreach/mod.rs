//! Outreach route handlers
//!
//! - Job seekers emailing their resume PDF
//! - Employers writing to candidates

pub mod send_candidate_email;
pub mod send_resume_email;

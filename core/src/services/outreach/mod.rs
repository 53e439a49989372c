//! Outreach emails sent on behalf of users
//!
//! Two flows share the password reset mailer:
//! - A job seeker sharing their resume PDF with a recipient
//! - An employer writing to a candidate about a position

mod service;
mod types;


pub use service::{decode_pdf_data, OutreachService};
pub use types::{CandidateMessage, ResumeShare, ResumeSubmission};

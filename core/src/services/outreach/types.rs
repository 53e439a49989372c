//! Outreach email payloads

/// Resume share as received from a client, with the PDF still base64 encoded
#[derive(Debug, Clone, Default)]
pub struct ResumeSubmission {
    pub recipient_email: String,
    pub sender_name: String,
    /// Optional personal note shown above the attachment
    pub message: Option<String>,
    /// Base64 PDF, optionally as a `data:` URL
    pub pdf_data: String,
    pub filename: String,
}

/// Validated resume share ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeShare {
    pub recipient_email: String,
    pub sender_name: String,
    pub message: Option<String>,
    pub filename: String,
    /// Decoded PDF bytes
    pub pdf: Vec<u8>,
}

/// Message from an employer to a candidate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// Company shown as sender and in the header
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub candidate_name: Option<String>,
}

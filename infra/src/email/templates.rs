//! HTML bodies and subjects for outgoing emails

use chrono::{DateTime, Utc};

use cc_core::{CandidateMessage, CodeDispatch};

const BRAND: &str = "CareerCatalyst";
const ACCENT: &str = "#00A389";

/// Rendered email ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTemplate {
    pub subject: String,
    pub html: String,
}

/// Reset code email, with distinct wording for a resend
pub fn reset_code(code: &str, dispatch: CodeDispatch, ttl_minutes: i64) -> EmailTemplate {
    let (subject, intro) = match dispatch {
        CodeDispatch::Initial => (
            format!("Password Reset OTP - {}", BRAND),
            "We received a request to reset your password. Use the following OTP to reset your password:",
        ),
        CodeDispatch::Resend => (
            format!("Password Reset OTP (Resent) - {}", BRAND),
            "As requested, here is your new OTP to reset your password:",
        ),
    };

    let body = format!(
        r#"<p>Hello,</p>
<p>{intro}</p>
<div style="background-color: #f4f4f4; padding: 20px; text-align: center; margin: 20px 0;">
  <h1 style="color: {ACCENT}; letter-spacing: 8px; margin: 0;">{code}</h1>
</div>
<p>This OTP will expire in <strong>{ttl_minutes} minutes</strong>.</p>
<p>If you did not request a password reset, please ignore this email or contact support if you have concerns.</p>"#,
        intro = intro,
        code = escape_html(code),
        ttl_minutes = ttl_minutes,
    );

    EmailTemplate {
        subject,
        html: layout("Password Reset Request", &body),
    }
}

/// Confirmation sent after a successful reset
pub fn password_changed(changed_at: DateTime<Utc>) -> EmailTemplate {
    let body = format!(
        r#"<p>Hello,</p>
<p>This is to confirm that your password has been successfully changed on <strong>{when}</strong>.</p>
<div style="background-color: #e8f8f5; padding: 15px; border-left: 4px solid {ACCENT}; margin: 20px 0;">
  <p style="margin: 0;">&#10003; Your account is now secured with your new password.</p>
</div>
<p>If you did not make this change or if you believe an unauthorized person has accessed your account, please contact our support team immediately.</p>"#,
        when = format_instant(changed_at),
    );

    EmailTemplate {
        subject: format!("Password Changed Successfully - {}", BRAND),
        html: layout("Password Changed", &body),
    }
}

/// Notice sent after an account is deleted
pub fn account_deleted(
    user_name: &str,
    deleted_at: DateTime<Utc>,
    support_address: Option<&str>,
) -> EmailTemplate {
    let support = match support_address {
        Some(address) => {
            let address = escape_html(address);
            format!(
                r#" at <a href="mailto:{address}" style="color: {ACCENT};">{address}</a>"#,
                address = address
            )
        }
        None => String::new(),
    };

    let body = format!(
        r#"<p>Hello {name},</p>
<p>This email confirms that your {BRAND} account has been successfully deleted on <strong>{when}</strong>.</p>
<div style="background-color: #fff4e5; padding: 15px; border-left: 4px solid #ff9800; margin: 20px 0;">
  <p style="margin: 0;">All your data, including profile information, resumes, job applications, and saved jobs have been permanently removed from our system.</p>
</div>
<p>If you did not request this account deletion or believe this was done in error, please contact our support team immediately{support}.</p>
<p>We're sorry to see you go. If you decide to return in the future, you're always welcome to create a new account.</p>
<p>Thank you for using {BRAND}.</p>"#,
        name = escape_html(user_name),
        when = format_instant(deleted_at),
        support = support,
    );

    EmailTemplate {
        subject: format!("Account Deleted - {}", BRAND),
        html: layout("Account Deleted", &body),
    }
}

/// Resume shared by a job seeker, sent with the PDF attached
pub fn resume_shared(sender_name: &str, message: Option<&str>, filename: &str) -> EmailTemplate {
    let sender = escape_html(sender_name);
    let note = match message {
        Some(message) => format!(
            r#"<div style="background-color: #ffffff; padding: 20px; border-left: 4px solid #225144; margin: 20px 0;">
  <h3>Personal Message:</h3>
  <p>{}</p>
</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };

    let body = format!(
        r#"<p>Hello,</p>
<p><strong>{sender}</strong> has shared their professional resume with you through {BRAND}.</p>
{note}
<div style="background-color: #e8f5e9; padding: 15px; margin: 20px 0;">
  <strong>Attachment:</strong> {filename}<br/>
  <small>The resume is attached as a PDF document to this email.</small>
</div>
<p>You can review the attached resume at your convenience.</p>
<p style="margin-top: 30px;">Best regards,<br/><strong>{sender}</strong></p>"#,
        sender = sender,
        note = note,
        filename = escape_html(filename),
    );

    EmailTemplate {
        subject: format!("{} has shared their resume with you", sender_name),
        html: layout("Resume Shared", &body),
    }
}

/// Employer message to a candidate; the subject is the employer's own
pub fn candidate_message(message: &CandidateMessage) -> EmailTemplate {
    let greeting = match &message.candidate_name {
        Some(name) => format!("<p>Dear {},</p>\n", escape_html(name)),
        None => String::new(),
    };
    let regarding = match &message.job_title {
        Some(title) => format!(
            "<p><strong>Regarding:</strong> {} Position</p>\n",
            escape_html(title)
        ),
        None => String::new(),
    };
    let signature = match &message.company {
        Some(company) => format!(
            r#"<p style="margin-top: 30px;">Best regards,<br/><span style="font-weight: bold; color: {ACCENT};">{}</span></p>"#,
            escape_html(company)
        ),
        None => String::new(),
    };

    let body = format!(
        r#"{greeting}{regarding}<div style="background-color: #ffffff; padding: 20px; margin: 20px 0; white-space: pre-wrap;">{text}</div>
{signature}"#,
        greeting = greeting,
        regarding = regarding,
        text = escape_html(&message.body),
        signature = signature,
    );

    EmailTemplate {
        subject: message.subject.clone(),
        html: layout(&escape_html(message.company.as_deref().unwrap_or(BRAND)), &body),
    }
}

fn layout(heading: &str, body: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
<h2 style="color: {ACCENT};">{heading}</h2>
{body}
<hr style="border: none; border-top: 1px solid #eee; margin: 20px 0;">
<p style="color: #999; font-size: 12px;">This is an automated email from {BRAND}. Please do not reply.</p>
</div>"#
    )
}

fn format_instant(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y at %H:%M UTC").to_string()
}

/// Escape text interpolated into HTML
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

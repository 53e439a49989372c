//! Unit tests for email templates

use chrono::{TimeZone, Utc};

use cc_core::CodeDispatch;

use crate::email::templates::{self, account_deleted, escape_html, password_changed, reset_code};

#[test]
fn test_reset_code_subjects_differ_for_resend() {
    let initial = reset_code("123456", CodeDispatch::Initial, 10);
    let resend = reset_code("123456", CodeDispatch::Resend, 10);

    assert_eq!(initial.subject, "Password Reset OTP - CareerCatalyst");
    assert_eq!(resend.subject, "Password Reset OTP (Resent) - CareerCatalyst");
    assert!(initial.html.contains("123456"));
    assert!(initial.html.contains("<strong>10 minutes</strong>"));
    assert!(resend.html.contains("here is your new OTP"));
}

#[test]
fn test_password_changed_includes_timestamp() {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    let template = password_changed(at);

    assert_eq!(template.subject, "Password Changed Successfully - CareerCatalyst");
    assert!(template.html.contains("March 1, 2025 at 09:30 UTC"));
}

#[test]
fn test_account_deleted_escapes_name() {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    let template = account_deleted("<b>Eve</b>", at, Some("support@careercatalyst.app"));

    assert_eq!(template.subject, "Account Deleted - CareerCatalyst");
    assert!(template.html.contains("Hello &lt;b&gt;Eve&lt;/b&gt;,"));
    assert!(template.html.contains("mailto:support@careercatalyst.app"));
}

#[test]
fn test_account_deleted_without_support_address() {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    let template = account_deleted("User", at, None);

    assert!(!template.html.contains("mailto:"));
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html(r#"a&b "c" 'd'"#), "a&amp;b &quot;c&quot; &#39;d&#39;");
}

#[test]
fn test_resume_shared_escapes_user_text() {
    let template = templates::resume_shared(
        "Ada <Lovelace>",
        Some("Hi & thanks"),
        "resume.pdf",
    );

    assert_eq!(template.subject, "Ada <Lovelace> has shared their resume with you");
    assert!(template.html.contains("<strong>Ada &lt;Lovelace&gt;</strong>"));
    assert!(template.html.contains("Personal Message:"));
    assert!(template.html.contains("Hi &amp; thanks"));
    assert!(template.html.contains("resume.pdf"));
}

#[test]
fn test_resume_shared_without_message() {
    let template = templates::resume_shared("Ada", None, "resume.pdf");
    assert!(!template.html.contains("Personal Message:"));
}

#[test]
fn test_candidate_message_optional_sections() {
    let full = cc_core::CandidateMessage {
        to: "grace@example.com".to_string(),
        subject: "Interview invitation".to_string(),
        body: "Line one\nLine two".to_string(),
        company: Some("Analytical Engines".to_string()),
        job_title: Some("Backend Engineer".to_string()),
        candidate_name: Some("Grace".to_string()),
    };
    let template = templates::candidate_message(&full);

    assert_eq!(template.subject, "Interview invitation");
    assert!(template.html.contains("<h2 style=\"color: #00A389;\">Analytical Engines</h2>"));
    assert!(template.html.contains("Dear Grace,"));
    assert!(template.html.contains("<strong>Regarding:</strong> Backend Engineer Position"));
    assert!(template.html.contains("Line one\nLine two"));

    let bare = cc_core::CandidateMessage {
        company: None,
        job_title: None,
        candidate_name: None,
        ..full
    };
    let template = templates::candidate_message(&bare);
    assert!(template.html.contains(">CareerCatalyst</h2>"));
    assert!(!template.html.contains("Regarding:"));
    assert!(!template.html.contains("Best regards"));
}

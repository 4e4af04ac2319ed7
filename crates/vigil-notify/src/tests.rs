use crate::channels::console;
use crate::error::NotifyError;
use crate::{EmailReporter, Reporter};
use vigil_common::Finding;

fn sample_findings() -> Vec<Finding> {
    vec![
        Finding::new("Docker verification error", "Docker container 'db' is not running"),
        Finding::new("Disk usage verification error", "Disk usage at 93 percent"),
    ]
}

#[test]
fn console_formats_title_and_indented_message() {
    let out = console::format_findings(&sample_findings());
    assert_eq!(
        out,
        "Docker verification error\n   Docker container 'db' is not running\n\
         Disk usage verification error\n   Disk usage at 93 percent\n"
    );
}

#[test]
fn console_formats_nothing_for_empty_batch() {
    assert_eq!(console::format_findings(&[]), "");
}

#[test]
fn email_body_one_line_per_finding() {
    let body = EmailReporter::format_body(&sample_findings());
    assert_eq!(
        body,
        "Docker verification error: Docker container 'db' is not running\n\
         Disk usage verification error: Disk usage at 93 percent\n"
    );
}

#[test]
fn email_body_preserves_embedded_newlines() {
    let findings = vec![Finding::new(
        "Load average verification error",
        "High load warning: 8.10 7.93 6.02 9/211 30477\n",
    )];
    let body = EmailReporter::format_body(&findings);
    assert!(body.contains("8.10 7.93 6.02"));
}

#[test]
fn email_reporter_requires_recipients() {
    let result = EmailReporter::new(
        "smtp.example.com",
        587,
        None,
        None,
        "vigil@example.com",
        &[],
    );
    let err = result.err().expect("should fail without recipients");
    match err {
        NotifyError::InvalidConfig(msg) => assert!(msg.contains("recipient")),
        other => panic!("expected InvalidConfig, got {other}"),
    }
}

#[tokio::test]
async fn email_reporter_builds_with_and_without_credentials() {
    let to = vec!["ops@example.com".to_string()];

    let plain = EmailReporter::new("smtp.example.com", 25, None, None, "vigil@example.com", &to)
        .expect("reporter without credentials");
    assert_eq!(plain.channel_name(), "email");

    let authed = EmailReporter::new(
        "smtp.example.com",
        587,
        Some("user"),
        Some("pass"),
        "vigil@example.com",
        &to,
    )
    .expect("reporter with credentials");
    assert_eq!(authed.channel_name(), "email");
}

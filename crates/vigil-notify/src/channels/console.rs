use crate::error::Result;
use crate::Reporter;
use async_trait::async_trait;
use vigil_common::Finding;

/// Prints findings to stdout: the title on one line, the detail indented
/// underneath.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_findings(findings: &[Finding]) -> String {
    let mut out = String::new();
    for finding in findings {
        out.push_str(&finding.title);
        out.push('\n');
        out.push_str("   ");
        out.push_str(&finding.message);
        out.push('\n');
    }
    out
}

#[async_trait]
impl Reporter for ConsoleReporter {
    async fn report(&self, findings: &[Finding]) -> Result<()> {
        print!("{}", format_findings(findings));
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "console"
    }
}

use vigil_common::Finding;

const TITLE: &str = "Docker verification error";

/// Checks that every expected container appears in the probe output.
///
/// Each non-empty line carries one container name prefixed by a single
/// character (the `/` that `docker inspect --format '{{.Name}}'` prints),
/// which is stripped before comparison. The remaining names are sorted and
/// each expected name is binary-searched; a miss produces one finding.
/// Duplicate expected names produce duplicate findings.
pub fn verify_running_containers(output: &str, expected: &[String]) -> Vec<Finding> {
    let mut running: Vec<&str> = output
        .lines()
        .filter(|line| !line.is_empty())
        .map(strip_lead_char)
        .collect();
    running.sort_unstable();

    let mut findings = Vec::new();
    for name in expected {
        if running.binary_search(&name.as_str()).is_err() {
            findings.push(Finding::new(
                TITLE,
                format!("Docker container '{name}' is not running"),
            ));
        }
    }

    findings
}

fn strip_lead_char(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.as_str()
}

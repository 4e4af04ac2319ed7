use vigil_common::Finding;

const TITLE: &str = "Disk usage verification error";

/// Checks a `df`-style table for mounts at or above the usage threshold.
///
/// The first line is a header and is skipped. Column index 1 of each data
/// line holds the usage as `NN%`; the threshold comparison is inclusive.
/// A value that fails to parse becomes a finding carrying the parse error;
/// lines with at most one column (e.g. a trailing blank) are skipped.
pub fn verify_disk_usage(output: &str, warn_percent: u32) -> Vec<Finding> {
    let mut findings = Vec::new();

    for line in output.lines().skip(1) {
        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.len() <= 1 {
            continue;
        }

        match columns[1].trim_end_matches('%').parse::<u32>() {
            Ok(value) if value >= warn_percent => {
                findings.push(Finding::new(TITLE, format!("Disk usage at {value} percent")));
            }
            Ok(_) => {}
            Err(e) => findings.push(Finding::new(TITLE, e.to_string())),
        }
    }

    findings
}

use vigil_common::Finding;

const TITLE: &str = "Load average verification error";

/// Checks the 5-minute load average against an inclusive threshold.
///
/// Expects a `/proc/loadavg`-style line: whitespace-separated fields with
/// the 1-, 5- and 15-minute averages first, so field index 1 is the
/// 5-minute value. Inputs with fewer than 3 fields produce no findings.
pub fn verify_load_average(output: &str, warn_load5: f64) -> Vec<Finding> {
    let mut findings = Vec::new();

    let columns: Vec<&str> = output.split_whitespace().collect();
    if columns.len() >= 3 {
        match columns[1].parse::<f64>() {
            Ok(value) if value >= warn_load5 => {
                findings.push(Finding::new(TITLE, format!("High load warning: {output}")));
            }
            Ok(_) => {}
            Err(e) => findings.push(Finding::new(TITLE, e.to_string())),
        }
    }

    findings
}

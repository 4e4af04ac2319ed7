use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::process::Command;
use vigil_check::Prober;

/// Collects probe output by shelling out.
///
/// The docker and df invocations go through `bash -c`: the container
/// listing needs command substitution, and `df --output` only behaves under
/// a shell on some distributions.
pub struct ShellProber;

impl ShellProber {
    pub fn new() -> Self {
        Self
    }

    async fn run(command: &str) -> Result<String> {
        let output = Command::new("bash").arg("-c").arg(command).output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("`{command}` exited with {}: {}", output.status, stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for ShellProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prober for ShellProber {
    async fn container_list(&self) -> Result<String> {
        Self::run("docker inspect --format='{{.Name}}' $(docker ps -q --no-trunc)").await
    }

    async fn disk_usage(&self) -> Result<String> {
        Self::run("df --output=source,pcent,target").await
    }

    async fn load_average(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string("/proc/loadavg").await?)
    }
}

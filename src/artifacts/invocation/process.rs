use crate::artifacts::invocation::Invocation;
use anyhow::Context;
use std::process::{ExitStatus, Stdio};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Exit code used when the child reports none (killed by a signal).
const SIGNALLED_EXIT_CODE: u8 = 1;

/// Runs the invocation with stdin, stdout and stderr inherited, so the
/// package manager's prompts and output reach the user untouched.
pub async fn run(invocation: &Invocation) -> anyhow::Result<ExitStatus> {
    debug!(
        program = %invocation.program(),
        args = ?invocation.args(),
        "Spawning package manager"
    );

    let start = Instant::now();
    let status = tokio::process::Command::new(invocation.program())
        .args(invocation.args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("failed to run '{}'", invocation.program()))?;

    if status.success() {
        info!(
            duration_ms = start.elapsed().as_millis(),
            "Package manager finished"
        );
    } else {
        warn!(
            exit_code = ?status.code(),
            command = %invocation,
            "Package manager failed"
        );
    }

    Ok(status)
}

/// Maps the child's status onto the code this process exits with.
pub fn exit_code(status: ExitStatus) -> u8 {
    match status.code() {
        Some(code) => u8::try_from(code & 0xff).unwrap_or(SIGNALLED_EXIT_CODE),
        None => SIGNALLED_EXIT_CODE,
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn child_exit_code_is_propagated() {
        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code(ExitStatus::from_raw(2 << 8)), 2);
    }

    #[test]
    fn signalled_child_maps_to_failure() {
        // raw wait status 9: terminated by SIGKILL
        assert_eq!(exit_code(ExitStatus::from_raw(9)), SIGNALLED_EXIT_CODE);
    }

    #[tokio::test]
    async fn status_of_the_child_is_returned() -> anyhow::Result<()> {
        let ok = run(&Invocation::new("true".to_string(), vec![])).await?;
        let failed = run(&Invocation::new("false".to_string(), vec![])).await?;

        assert!(ok.success());
        assert_eq!(failed.code(), Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn missing_program_is_an_error() {
        let invocation = Invocation::new("gitpip-no-such-program".to_string(), vec![]);
        let err = run(&invocation).await.unwrap_err();
        assert!(err.to_string().contains("failed to run 'gitpip-no-such-program'"));
    }
}

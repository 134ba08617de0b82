use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use common::command::{project_dir, random_name, run_gitpip_command, run_gitpip_with};
use predicates::prelude::*;
use rstest::rstest;

mod common;

#[rstest]
fn uninstall_composes_pip_command(project_dir: TempDir) {
    run_gitpip_command(project_dir.path(), &["uninstall", "xyzs_py", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::eq("pip uninstall xyzs_py\n"));
}

#[rstest]
fn uninstall_with_yes_skips_confirmation(project_dir: TempDir, random_name: String) {
    run_gitpip_command(
        project_dir.path(),
        &["uninstall", "-y", &random_name, "--dry-run"],
    )
    .assert()
    .success()
    .stdout(predicate::eq(format!("pip uninstall -y {random_name}\n")));
}

#[rstest]
fn assume_yes_can_come_from_config(project_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    project_dir
        .child("gitpip.toml")
        .write_str("package_manager = \"python3\"\nassume_yes = true\n")?;

    run_gitpip_command(project_dir.path(), &["uninstall", "xyzs_py", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::eq("python3 -m pip uninstall -y xyzs_py\n"));

    Ok(())
}

#[rstest]
fn empty_package_name_is_rejected_before_spawning(project_dir: TempDir) {
    let marker = project_dir.path().join("spawned");
    let package_manager = format!("touch {}", marker.display());

    run_gitpip_with(project_dir.path(), &package_manager, &["uninstall", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("package name cannot be empty"));

    assert!(!marker.exists());
}

#[rstest]
#[case::url("https://github.com/JedTK/xyzs_py.git")]
#[case::version_specifier("xyzs_py==1.0")]
fn non_package_names_are_rejected(project_dir: TempDir, #[case] name: &str) {
    run_gitpip_command(project_dir.path(), &["uninstall", name, "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("invalid package name: {name}")));
}

#[cfg(unix)]
#[rstest]
fn uninstall_output_is_passed_through(project_dir: TempDir) {
    run_gitpip_with(project_dir.path(), "echo", &["uninstall", "xyzs_py", "--yes"])
        .assert()
        .success()
        .stdout(predicate::eq("uninstall -y xyzs_py\n"));
}

#[cfg(unix)]
#[rstest]
fn failed_uninstall_fails_gitpip(project_dir: TempDir) {
    run_gitpip_with(project_dir.path(), "false", &["uninstall", "xyzs_py"])
        .assert()
        .code(1);
}

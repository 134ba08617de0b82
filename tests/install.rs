use assert_fs::TempDir;
use common::command::{XYZS_URL, project_dir, random_name, run_gitpip_command, run_gitpip_with};
use predicates::prelude::*;
use rstest::rstest;

mod common;

#[rstest]
fn install_from_branch_composes_pip_command(project_dir: TempDir) {
    run_gitpip_command(
        project_dir.path(),
        &["install", &format!("{XYZS_URL}@main"), "--dry-run"],
    )
    .assert()
    .success()
    .stdout(predicate::eq(
        "pip install git+https://github.com/JedTK/xyzs_py.git@main\n",
    ));
}

#[rstest]
fn install_from_tag_option_composes_pip_command(project_dir: TempDir) {
    run_gitpip_command(
        project_dir.path(),
        &["install", XYZS_URL, "--tag", "v1.0.1", "--dry-run"],
    )
    .assert()
    .success()
    .stdout(predicate::eq(
        "pip install git+https://github.com/JedTK/xyzs_py.git@v1.0.1\n",
    ));
}

#[rstest]
fn install_without_ref_leaves_default_branch_to_git(project_dir: TempDir) {
    run_gitpip_command(project_dir.path(), &["install", XYZS_URL, "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "pip install git+https://github.com/JedTK/xyzs_py.git\n",
        ));
}

#[rstest]
fn install_with_upgrade_and_force_reinstall(project_dir: TempDir) {
    run_gitpip_command(
        project_dir.path(),
        &[
            "install",
            "--upgrade",
            "--force-reinstall",
            &format!("git+{XYZS_URL}@main"),
            "--dry-run",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::eq(
        "pip install --upgrade --force-reinstall git+https://github.com/JedTK/xyzs_py.git@main\n",
    ));
}

#[rstest]
fn upgrade_is_install_with_refresh_flags(project_dir: TempDir) {
    run_gitpip_command(
        project_dir.path(),
        &["upgrade", XYZS_URL, "-b", "main", "--no-deps", "--dry-run"],
    )
    .assert()
    .success()
    .stdout(predicate::eq(
        "pip install --upgrade --force-reinstall --no-deps git+https://github.com/JedTK/xyzs_py.git@main\n",
    ));
}

#[rstest]
fn install_with_name_adds_egg_fragment(project_dir: TempDir, random_name: String) {
    run_gitpip_command(
        project_dir.path(),
        &["install", XYZS_URL, "-b", &random_name, "-n", &random_name, "--dry-run"],
    )
    .assert()
    .success()
    .stdout(predicate::eq(format!(
        "pip install git+{XYZS_URL}@{random_name}#egg={random_name}\n"
    )));
}

#[rstest]
#[case::pip3("pip3", "pip3 install")]
#[case::python("python", "python -m pip install")]
#[case::uv("uv", "uv pip install")]
fn package_manager_presets(project_dir: TempDir, #[case] preset: &str, #[case] prefix: &str) {
    run_gitpip_command(
        project_dir.path(),
        &["--package-manager", preset, "install", XYZS_URL, "--dry-run"],
    )
    .assert()
    .success()
    .stdout(predicate::eq(format!("{prefix} git+{XYZS_URL}\n")));
}

#[rstest]
fn branch_and_tag_together_are_rejected_before_spawning(project_dir: TempDir) {
    let marker = project_dir.path().join("spawned");
    let package_manager = format!("touch {}", marker.display());

    run_gitpip_with(
        project_dir.path(),
        &package_manager,
        &["install", XYZS_URL, "--branch", "main", "--tag", "v1.0.1"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains(
        "conflicting references: branch 'main' and tag 'v1.0.1' cannot be combined",
    ));

    assert!(!marker.exists());
}

#[rstest]
fn inline_ref_and_option_are_rejected(project_dir: TempDir) {
    run_gitpip_command(
        project_dir.path(),
        &["install", &format!("{XYZS_URL}@dev"), "--tag", "v1.0.1", "--dry-run"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("conflicting references"));
}

#[rstest]
#[case::empty_url("", "repository url cannot be empty")]
#[case::scp("git@github.com:JedTK/xyzs_py.git", "scp-style addresses are not supported")]
#[case::bad_ref("https://github.com/JedTK/xyzs_py.git@bad..ref", "invalid ref name: bad..ref")]
#[case::dangling("https://github.com/JedTK/xyzs_py.git@", "ref name cannot be empty")]
fn malformed_targets_are_rejected(
    project_dir: TempDir,
    #[case] target: &str,
    #[case] message: &str,
) {
    run_gitpip_command(project_dir.path(), &["install", target, "--dry-run"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(message));
}

#[cfg(unix)]
#[rstest]
fn package_manager_output_is_passed_through(project_dir: TempDir) {
    run_gitpip_with(project_dir.path(), "echo", &["install", XYZS_URL, "-t", "v1.0.1"])
        .assert()
        .success()
        .stdout(predicate::eq(format!("install git+{XYZS_URL}@v1.0.1\n")));
}

#[cfg(unix)]
#[rstest]
fn package_manager_exit_status_is_propagated(project_dir: TempDir) {
    let fake_pip = common::command::exiting_package_manager(project_dir.path(), 3);

    run_gitpip_with(
        project_dir.path(),
        &fake_pip.display().to_string(),
        &["install", XYZS_URL],
    )
    .assert()
    .code(3);
}

#[rstest]
fn missing_package_manager_is_a_gitpip_error(project_dir: TempDir) {
    run_gitpip_with(
        project_dir.path(),
        "gitpip-no-such-pip",
        &["install", XYZS_URL],
    )
    .assert()
    .code(1)
    .stderr(predicate::str::contains("failed to run 'gitpip-no-such-pip'"));
}

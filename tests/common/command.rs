use assert_cmd::Command;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Word;
use rstest::fixture;
use std::path::Path;

pub const XYZS_URL: &str = "https://github.com/JedTK/xyzs_py.git";

#[fixture]
pub fn project_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A lowercase word usable both as a package name and a ref name.
#[fixture]
pub fn random_name() -> String {
    let word: String = Word().fake();
    format!("{}-pkg", word.to_lowercase())
}

pub fn run_gitpip_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitpip").expect("Failed to find gitpip binary");
    cmd.current_dir(dir);
    cmd.env_remove("GITPIP_CONFIG");
    cmd.env_remove("GITPIP_PACKAGE_MANAGER");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Runs gitpip with a stand-in package manager instead of pip.
pub fn run_gitpip_with(dir: &Path, package_manager: &str, args: &[&str]) -> Command {
    let mut cmd = run_gitpip_command(dir, args);
    cmd.env("GITPIP_PACKAGE_MANAGER", package_manager);
    cmd
}

/// Writes an executable shell script that exits with `code`.
#[cfg(unix)]
pub fn exiting_package_manager(dir: &Path, code: i32) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-pip");
    std::fs::write(&path, format!("#!/bin/sh\nexit {code}\n"))
        .unwrap_or_else(|e| panic!("Failed to write {:?}: {}", path, e));
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .unwrap_or_else(|e| panic!("Failed to chmod {:?}: {}", path, e));
    path
}

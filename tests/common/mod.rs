use assert_cmd::Command;
use std::path::Path;

pub fn gradetrack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gradetrack").unwrap();
    cmd.env_remove("GRADETRACK_ROOT");
    cmd.env_remove("GRADETRACK_LOG");
    cmd
}

/// Initialize a workspace at `path` with a three year horizon and target 2.0
#[allow(dead_code)]
pub fn init_workspace(path: &Path) {
    gradetrack_cmd()
        .arg("init")
        .arg(path)
        .args(["--target-time", "3", "--target-grade", "2.0"])
        .assert()
        .success();
}

/// Run a command inside the workspace at `path`
#[allow(dead_code)]
pub fn in_workspace(path: &Path) -> Command {
    let mut cmd = gradetrack_cmd();
    cmd.current_dir(path);
    cmd
}

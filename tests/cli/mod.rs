mod generate;

use assert_cmd::Command;
use std::path::Path;

/// `ddlgen` running inside `dir`, isolated from the caller's environment
pub fn ddlgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ddlgen").unwrap();
    cmd.current_dir(dir)
        .env_remove("DDLGEN_DIALECT")
        .env_remove("RUST_LOG");
    cmd
}

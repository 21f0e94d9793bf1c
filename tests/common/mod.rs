use assert_cmd::Command;

pub fn chunktag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chunktag").unwrap();
    cmd.env_remove("CHUNKTAG_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

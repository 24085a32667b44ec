use std::{
    path::Path,
    process::{Command, Output},
};

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

// Nothing listens on port 1, connecting fails immediately.
const UNREACHABLE_NODE: &str = "http://127.0.0.1:1";

fn deploy_voting(project_root: &Path, node_url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_deploy-voting"))
        .env_clear()
        .arg("--project-root")
        .arg(project_root)
        .arg("--node-url")
        .arg(node_url)
        .output()
        .unwrap()
}

#[test]
fn missing_artifact_exits_with_status_1() {
    let root = tempfile::tempdir().unwrap();

    let output = deploy_voting(root.path(), UNREACHABLE_NODE);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(r#"artifact for contract "Voting" not found"#));
}

#[test]
fn unreachable_node_exits_with_status_1() {
    let output = deploy_voting(Path::new(FIXTURES), UNREACHABLE_NODE);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to deploy Voting"));
}

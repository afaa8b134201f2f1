use anyhow::Result;

use crate::common::{DriverTree, EXIT_ENV};

#[test]
fn default_port_launches_sibling_environment() -> Result<()> {
    let tree = DriverTree::new("foo.exe")?;
    let env_dir = tree.install_environment("cloudshell-L1-foo")?;

    let output = tree.run(&[], &[])?;
    assert!(
        output.status.success(),
        "launcher should succeed: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let prefix = tree.drivers_prefix();
    let recorded = tree.recorded_args(&env_dir)?;
    assert_eq!(
        recorded,
        vec![
            format!("{prefix}cloudshell-L1-foo/main.py"),
            "4000".to_string(),
            format!("{prefix}../Logs"),
        ]
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("Starting driver foo\n"),
        "stdout: {stdout}"
    );
    assert!(
        stdout.contains(&format!("'{prefix}cloudshell-L1-foo/bin/python'")),
        "stdout should print the command: {stdout}"
    );
    Ok(())
}

#[test]
fn explicit_port_is_passed_verbatim() -> Result<()> {
    let tree = DriverTree::new("bar")?;
    let env_dir = tree.install_environment("cloudshell-L1-bar")?;

    for port in ["5001", "not-a-port"] {
        let output = tree.run(&[port], &[])?;
        assert!(output.status.success(), "port {port}: {output:?}");
        let recorded = tree.recorded_args(&env_dir)?;
        assert_eq!(recorded.get(1).map(String::as_str), Some(port));
    }
    Ok(())
}

#[test]
fn driver_exit_code_is_propagated() -> Result<()> {
    let tree = DriverTree::new("foo.exe")?;
    tree.install_environment("cloudshell-L1-foo")?;

    let output = tree.run(&[], &[(EXIT_ENV, "7")])?;
    assert_eq!(output.status.code(), Some(7), "output: {output:?}");
    Ok(())
}

#[test]
fn missing_environment_surfaces_shell_failure() -> Result<()> {
    let tree = DriverTree::new("ghost.exe")?;

    let output = tree.run(&["4001"], &[])?;
    assert_eq!(
        output.status.code(),
        Some(127),
        "sh reports a missing interpreter as 127: {output:?}"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Starting driver ghost"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn flag_like_port_reaches_the_driver() -> Result<()> {
    let tree = DriverTree::new("foo.exe")?;
    let env_dir = tree.install_environment("cloudshell-L1-foo")?;

    for port in ["--help", "-V", "--"] {
        let output = tree.run(&[port], &[])?;
        assert!(output.status.success(), "port {port}: {output:?}");
        let recorded = tree.recorded_args(&env_dir)?;
        assert_eq!(recorded.get(1).map(String::as_str), Some(port));
    }
    Ok(())
}

#[test]
fn shell_metacharacters_in_deployment_path_stay_literal() -> Result<()> {
    let tree = DriverTree::new_under("a$HOME `x` it's", "foo.exe")?;
    let env_dir = tree.install_environment("cloudshell-L1-foo")?;

    let output = tree.run(&[], &[])?;
    assert!(
        output.status.success(),
        "launcher should succeed: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let prefix = tree.drivers_prefix();
    assert_eq!(
        tree.recorded_args(&env_dir)?,
        vec![
            format!("{prefix}cloudshell-L1-foo/main.py"),
            "4000".to_string(),
            format!("{prefix}../Logs"),
        ]
    );
    Ok(())
}

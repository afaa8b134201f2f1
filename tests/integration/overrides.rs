use anyhow::Result;

use crate::common::DriverTree;

#[test]
fn overrides_file_changes_prefix_and_default_port() -> Result<()> {
    let tree = DriverTree::new("foo.exe")?;
    let env_dir = tree.install_environment("acme-foo")?;
    tree.write_overrides(
        "foo",
        "env_prefix = \"acme-\"\ndefault_port = \"4100\"\nlogs_dir = \"DriverLogs\"\n",
    )?;

    let output = tree.run(&[], &[])?;
    assert!(output.status.success(), "output: {output:?}");

    let prefix = tree.drivers_prefix();
    assert_eq!(
        tree.recorded_args(&env_dir)?,
        vec![
            format!("{prefix}acme-foo/main.py"),
            "4100".to_string(),
            format!("{prefix}../DriverLogs"),
        ]
    );
    Ok(())
}

#[test]
fn cli_port_beats_overrides_default() -> Result<()> {
    let tree = DriverTree::new("foo")?;
    let env_dir = tree.install_environment("cloudshell-L1-foo")?;
    tree.write_overrides("foo", "default_port = 4100\n")?;

    let output = tree.run(&["4200"], &[])?;
    assert!(output.status.success(), "output: {output:?}");
    assert_eq!(
        tree.recorded_args(&env_dir)?.get(1).map(String::as_str),
        Some("4200")
    );
    Ok(())
}

#[test]
fn invalid_overrides_abort_before_spawning() -> Result<()> {
    let tree = DriverTree::new("foo.exe")?;
    let env_dir = tree.install_environment("cloudshell-L1-foo")?;
    tree.write_overrides("foo", "env_prefix = \"\"\n")?;

    let output = tree.run(&[], &[])?;
    assert_eq!(output.status.code(), Some(1), "output: {output:?}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("env_prefix"), "stderr: {stderr}");
    assert!(
        tree.recorded_args(&env_dir).is_err(),
        "driver must not be started"
    );
    Ok(())
}

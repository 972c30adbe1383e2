use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = cmd.output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Created .deadstylerc.json"));

    let content = test.read_file(".deadstylerc.json")?;
    assert!(content.contains("\"createObject\": \"StyleSheet\""));
    assert!(content.contains("\"includes\""));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".deadstylerc.json", r#"{ "includes": ["app"] }"#)?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = cmd.output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("already exists"));
    assert_eq!(test.read_file(".deadstylerc.json")?, r#"{ "includes": ["app"] }"#);
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("clean"));
    Ok(())
}

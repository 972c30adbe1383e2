use anyhow::Result;

use crate::CliTest;

fn setup_config(test: &CliTest) -> Result<()> {
    test.write_file(".deadstylerc.json", r#"{ "includes": ["src"] }"#)
}

#[test]
fn test_check_reports_unused_styles() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/App.tsx",
        r#"
import { StyleSheet } from "react-native";

const styles = StyleSheet.create({
  container: { flex: 1 },
  title: { fontSize: 20 },
  banner: { color: "red" },
});

export function App() {
  return <div style={styles.container}>{styles.title}</div>;
}
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("warning: \"banner\""));
    assert!(stdout.contains("unused-style"));
    assert!(stdout.contains("src/App.tsx:7:3"));
    assert!(stdout.contains("1 unused style across 1 file"));
    assert!(!stdout.contains("\"container\""));
    assert!(!stdout.contains("\"title\""));
    Ok(())
}

#[test]
fn test_check_clean_project_exits_zero() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/App.tsx",
        r#"
const styles = StyleSheet.create({ container: { flex: 1 } });
export const App = () => <div style={styles.container} />;
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Checked 1 source file - no unused styles found"));
    Ok(())
}

#[test]
fn test_check_counts_alias_and_subscript_usages() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/App.tsx",
        r#"
const styles = StyleSheet.create({
  viaAlias: { flex: 1 },
  viaSubscript: { flex: 2 },
  reallyGone: { flex: 3 },
});
const s = styles;
export const App = () => <div style={[s.viaAlias, styles["viaSubscript"]]} />;
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("\"reallyGone\""));
    assert!(!stdout.contains("\"viaAlias\""));
    assert!(!stdout.contains("\"viaSubscript\""));
    Ok(())
}

#[test]
fn test_check_dynamic_subscript_is_reported() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    // A computed access with a variable key cannot be resolved, so the
    // declaration counts as unused.
    test.write_file(
        "src/App.tsx",
        r#"
const styles = StyleSheet.create({ dynamic: { flex: 1 } });
const key = "dynamic";
export const value = styles[key];
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("\"dynamic\""));
    Ok(())
}

#[test]
fn test_check_aggregates_across_files() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/One.tsx",
        "const styles = StyleSheet.create({ a: {}, gone: {} });\nconst x = styles.a;\n",
    )?;
    test.write_file(
        "src/Two.tsx",
        "const styles = StyleSheet.create({ b: {}, lost: {} });\nconst y = styles.b;\n",
    )?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("\"gone\""));
    assert!(stdout.contains("\"lost\""));
    assert!(stdout.contains("2 unused styles across 2 files"));
    Ok(())
}

#[test]
fn test_check_unparsable_file_is_a_warning_not_a_failure() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/Good.tsx",
        "const styles = StyleSheet.create({ a: {} });\nconst x = styles.a;\n",
    )?;
    test.write_file("src/Broken.tsx", "const styles = StyleSheet.create({\n")?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("parse-error"));
    assert!(stderr.contains("could not be parsed"));
    Ok(())
}

#[test]
fn test_check_respects_create_object_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".deadstylerc.json",
        r#"{ "includes": ["src"], "createObject": "EStyleSheet" }"#,
    )?;

    test.write_file(
        "src/App.tsx",
        r#"
const styles = EStyleSheet.create({ used: {}, gone: {} });
export const App = () => <div style={styles.used} />;
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("\"gone\""));
    Ok(())
}

#[test]
fn test_check_create_object_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/App.tsx",
        "const styles = Theme.create({ gone: {} });\nexport const x = 1;\n",
    )?;

    // Default object name matches nothing in this file.
    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let mut cmd = test.check_command();
    cmd.arg("--create-object").arg("Theme");
    let output = cmd.output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("\"gone\""));
    Ok(())
}

#[test]
fn test_check_skips_test_files_by_default() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    test.write_file(
        "src/App.test.tsx",
        "const styles = StyleSheet.create({ gone: {} });\nexport const x = 1;\n",
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_check_respects_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".deadstylerc.json",
        r#"{ "includes": ["src"], "ignores": ["**/generated/**"] }"#,
    )?;

    test.write_file(
        "src/generated/Theme.tsx",
        "const styles = StyleSheet.create({ gone: {} });\nexport const x = 1;\n",
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

use anyhow::Result;

use crate::CliTest;

fn setup_config(test: &CliTest) -> Result<()> {
    test.write_file(".deadstylerc.json", r#"{ "includes": ["src"] }"#)
}

const APP_WITH_UNUSED: &str = r#"import { StyleSheet } from "react-native";

const styles = StyleSheet.create({
  container: { flex: 1 },
  banner: { color: "red" },
  title: { fontSize: 20 },
});

export function App() {
  return <div style={styles.container}>{styles.title}</div>;
}
"#;

#[test]
fn test_clean_dry_run_lists_but_does_not_modify() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("src/App.tsx", APP_WITH_UNUSED)?;

    let output = test.clean_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("'banner'"));
    assert!(stdout.contains("Would remove 1 style across 1 file."));
    assert!(stdout.contains("--apply"));
    assert_eq!(test.read_file("src/App.tsx")?, APP_WITH_UNUSED);
    Ok(())
}

#[test]
fn test_clean_apply_rewrites_the_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("src/App.tsx", APP_WITH_UNUSED)?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let output = cmd.output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Removed 1 style across 1 file."));

    let content = test.read_file("src/App.tsx")?;
    assert!(!content.contains("banner"));
    assert!(content.contains("container: { flex: 1 },"));
    assert!(content.contains("title: { fontSize: 20 },"));
    // Untouched code survives byte for byte.
    assert!(content.contains("import { StyleSheet } from \"react-native\";"));
    assert!(content.contains("return <div style={styles.container}>{styles.title}</div>;"));
    Ok(())
}

#[test]
fn test_clean_apply_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("src/App.tsx", APP_WITH_UNUSED)?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    assert_eq!(cmd.output()?.status.code(), Some(0));
    let after_first = test.read_file("src/App.tsx")?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let output = cmd.output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("no unused styles found"));
    assert_eq!(test.read_file("src/App.tsx")?, after_first);
    Ok(())
}

#[test]
fn test_clean_nothing_to_remove() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "src/App.tsx",
        "const styles = StyleSheet.create({ a: {} });\nconst x = styles.a;\n",
    )?;

    let output = test.clean_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Checked 1 source file - no unused styles found"));
    assert!(!stdout.contains("Would remove"));
    Ok(())
}

#[test]
fn test_clean_apply_removes_adjacent_declarations() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "src/App.tsx",
        "const styles = StyleSheet.create({\n  one: {},\n  two: {},\n  keep: {},\n});\nconst x = styles.keep;\n",
    )?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    let content = test.read_file("src/App.tsx")?;
    assert_eq!(
        content,
        "const styles = StyleSheet.create({\n  keep: {},\n});\nconst x = styles.keep;\n"
    );
    Ok(())
}

#[test]
fn test_clean_skips_unparsable_files() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("src/Broken.tsx", "const styles = StyleSheet.create({\n")?;
    test.write_file(
        "src/Good.tsx",
        "const styles = StyleSheet.create({ keep: {}, drop: {} });\nconst x = styles.keep;\n",
    )?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    // The broken file is untouched, the good one is cleaned.
    assert_eq!(
        test.read_file("src/Broken.tsx")?,
        "const styles = StyleSheet.create({\n"
    );
    assert!(!test.read_file("src/Good.tsx")?.contains("drop"));
    Ok(())
}

#[test]
fn test_clean_names_the_file_that_failed_to_parse() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("src/Broken.tsx", "const styles = StyleSheet.create({\n")?;

    let output = test.clean_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("src/Broken.tsx"));

    // The path is named under -v as well.
    let mut cmd = test.clean_command();
    cmd.arg("-v");
    let output = cmd.output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("src/Broken.tsx"));
    Ok(())
}

#[test]
fn test_clean_multiple_files() -> Result<()> {
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

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let output = cmd.output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Removed 2 styles across 2 files."));
    assert!(!test.read_file("src/One.tsx")?.contains("gone"));
    assert!(!test.read_file("src/Two.tsx")?.contains("lost"));
    Ok(())
}

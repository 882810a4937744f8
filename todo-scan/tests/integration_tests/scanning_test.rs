// tests/integration_tests/scanning_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use tempfile::TempDir;
use todo_scan::{Finding, Marker, ScanConfig, ScanSummary, scan_directory};

#[test]
fn test_scan_workspace() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let findings = scan_directory(temp_dir.path(), &ScanConfig::default())?;

    let located: Vec<(&str, usize, Marker)> = findings
        .iter()
        .map(|f| (f.file.as_str(), f.line, f.marker))
        .collect();

    assert_eq!(
        located,
        vec![
            ("parser/src/gen/tables.rs", 1, Marker::Todo),
            ("parser/src/lib.rs", 1, Marker::Note),
            ("parser/src/lib.rs", 3, Marker::Hack),
            ("src/main.rs", 2, Marker::Todo),
            ("src/main.rs", 4, Marker::Fixme),
            ("src/util.rs", 1, Marker::Semantic),
        ],
        "Excluded, hidden and non-source files must not contribute"
    );

    let summary = ScanSummary::from_findings(&findings);
    assert_eq!(summary.findings, 6);
    assert_eq!(summary.files_with_findings, 4);
    Ok(())
}

#[test]
fn test_extracted_text() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let findings = scan_directory(temp_dir.path(), &ScanConfig::default())?;

    let texts: Vec<&str> = findings.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "regenerate",
            "grammar follows the 2021 draft",
            "skip BOM | handle later",
            "wire up the parser",
            "magic",
            "keep this around until we revisit the format",
        ]
    );
    Ok(())
}

#[test]
fn test_reference_example() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut content = String::new();
    for _ in 0..9 {
        content.push_str("let _ = ();\n");
    }
    content.push_str("// TODO: fix bounds check\n");
    create_test_file(temp_dir.path(), "core/src/foo.rs", &content)?;
    create_test_file(temp_dir.path(), "core/Cargo.toml", "[package]\n")?;

    let findings = scan_directory(temp_dir.path(), &ScanConfig::default())?;

    assert_eq!(
        findings,
        vec![Finding {
            file: String::from("core/src/foo.rs"),
            line: 10,
            marker: Marker::Todo,
            text: String::from("fix bounds check"),
            owner: String::from("core/plans.md"),
        }]
    );
    Ok(())
}

#[test]
fn test_one_finding_per_line() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(
        temp_dir.path(),
        "lib.rs",
        "// TODO: a // FIXME: b // temporary workaround\n/* TODO x */ /* FIXME y */\n",
    )?;

    let findings = scan_directory(temp_dir.path(), &ScanConfig::default())?;
    assert_eq!(findings.len(), 2);
    assert!(findings.iter().all(|f| f.marker == Marker::Todo));
    Ok(())
}

#[test]
fn test_long_comment_is_truncated() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let comment = "w".repeat(500);
    create_test_file(temp_dir.path(), "lib.rs", &format!("// NOTE: {comment}\n"))?;

    let findings = scan_directory(temp_dir.path(), &ScanConfig::default())?;
    assert_eq!(findings[0].text.chars().count(), 200);
    assert_eq!(findings[0].text, comment[..200]);
    Ok(())
}

#[test]
fn test_invalid_utf8_does_not_abort_scan() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("a.rs"), b"\xFF\xFE// HACK: binary prefix\n")?;
    create_test_file(temp_dir.path(), "b.rs", "// TODO: after the bad file\n")?;

    let findings = scan_directory(temp_dir.path(), &ScanConfig::default())?;
    let files: Vec<&str> = findings.iter().map(|f| f.file.as_str()).collect();
    assert_eq!(files, vec!["a.rs", "b.rs"]);
    assert_eq!(findings[0].text, "binary prefix");
    Ok(())
}

#[test]
fn test_empty_tree() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let findings = scan_directory(temp_dir.path(), &ScanConfig::default())?;
    assert!(findings.is_empty());
    assert_eq!(
        ScanSummary::from_findings(&findings).to_string(),
        "Found 0 TODO(s) in 0 file(s)"
    );
    Ok(())
}

#[test]
fn test_hidden_file_in_visible_directory_is_scanned() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "src/.generated.rs", "// TODO: hidden file\n")?;

    let findings = scan_directory(temp_dir.path(), &ScanConfig::default())?;
    let hidden: Vec<&Finding> = findings
        .iter()
        .filter(|f| f.file == "src/.generated.rs")
        .collect();

    assert_eq!(hidden.len(), 1);
    assert_eq!(hidden[0].marker, Marker::Todo);
    assert_eq!(hidden[0].text, "hidden file");
    assert!(findings.iter().all(|f| !f.file.starts_with(".cargo/")));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_scanned() -> Result<()> {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "shared/util.rs", "// TODO: via link\n")?;
    std::fs::create_dir_all(temp_dir.path().join("real"))?;
    symlink(
        temp_dir.path().join("shared/util.rs"),
        temp_dir.path().join("real/link.rs"),
    )?;

    let findings = scan_directory(temp_dir.path(), &ScanConfig::default())?;
    let files: Vec<&str> = findings.iter().map(|f| f.file.as_str()).collect();
    assert_eq!(files, vec!["real/link.rs", "shared/util.rs"]);
    assert!(findings.iter().all(|f| f.text == "via link"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_dangling_link_contributes_nothing() -> Result<()> {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "a.rs", "// FIXME: still found\n")?;
    symlink(temp_dir.path().join("missing.rs"), temp_dir.path().join("b.rs"))?;

    let findings = scan_directory(temp_dir.path(), &ScanConfig::default())?;
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].file, "a.rs");
    Ok(())
}

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn xmlite() -> Result<Command, Box<dyn std::error::Error>> {
    Ok(Command::cargo_bin("xmlite")?)
}

#[test]
fn test_json_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    xmlite()?
        .arg("--compact")
        .write_stdin("<a x='1'>hi<b/></a>")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"declaration":null,"root":{"name":"a","attributes":{"x":"1"},"children":[{"name":"b","attributes":{},"children":[]}],"content":"hi"}}"#,
        ));
    Ok(())
}

#[test]
fn test_tree_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("doc.xml");
    fs::write(&input, "<?xml version=\"1.0\"?>\n<root>\n  <item n=\"1\">one</item>\n</root>\n")?;

    xmlite()?
        .arg(&input)
        .args(["--format", "tree"])
        .assert()
        .success()
        .stdout("?xml version=\"1.0\"\nroot\n  item n=\"1\": \"one\"\n");
    Ok(())
}

#[test]
fn test_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("out.json");

    xmlite()?
        .arg("--output")
        .arg(&output)
        .write_stdin("<r/>")
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(&output)?;
    assert!(written.contains("\"name\": \"r\""));
    Ok(())
}

#[test]
fn test_max_depth_truncates() -> Result<(), Box<dyn std::error::Error>> {
    xmlite()?
        .args(["--format", "tree", "--max-depth", "1"])
        .write_stdin("<a><b><c/></b></a>")
        .assert()
        .success()
        .stdout("a\n");
    Ok(())
}

#[test]
fn test_empty_stdin_fails() -> Result<(), Box<dyn std::error::Error>> {
    xmlite()?
        .write_stdin("  \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input provided on stdin"));
    Ok(())
}

#[test]
fn test_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    xmlite()?
        .arg("/no/such/file.xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read /no/such/file.xml"));
    Ok(())
}

#[test]
fn test_invalid_utf8_fails() -> Result<(), Box<dyn std::error::Error>> {
    xmlite()?
        .write_stdin(&b"<a>\xff</a>"[..])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid utf-8"));
    Ok(())
}

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const DRAFT: &str = r###"{
  "title": "Anchors",
  "content": "## First Part\ntext\n### Sub Part"
}
"###;

#[test]
fn convert_is_the_default_command() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("post.json");
    fs::write(&input, DRAFT).unwrap();

    let mut cmd = cargo_bin_cmd!("quill");
    cmd.current_dir(dir.path())
        .arg(input.as_os_str())
        .arg("--to")
        .arg("html");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<h2 id=\"first-part\">First Part</h2>"))
        .stdout(predicate::str::contains("href=\"#first-part\""))
        .stdout(predicate::str::contains("<h3 id=\"sub-part\">Sub Part</h3>"));
}

#[test]
fn convert_writes_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("post.json");
    let output = dir.path().join("post.tag");
    fs::write(&input, DRAFT).unwrap();

    let mut cmd = cargo_bin_cmd!("quill");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(input.as_os_str())
        .arg("--to")
        .arg("tag")
        .arg("-o")
        .arg(output.as_os_str());
    cmd.assert().success().stdout("");

    let tag = fs::read_to_string(&output).unwrap();
    assert!(tag.starts_with("<article>Anchors\n"));
    assert!(tag.contains("<toc-entry href=\"#sub-part\" indented=\"true\">Sub Part</toc-entry>"));
}

#[test]
fn convert_uses_theme_and_css_from_config() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("post.json");
    fs::write(&input, DRAFT).unwrap();

    let css_path = dir.path().join("extra.css");
    fs::write(&css_path, ".quill-extra-rule { color: teal; }").unwrap();

    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        format!(
            "[convert.html]\ntheme = \"serif\"\ncustom_css = \"{}\"\n",
            css_path.display()
        ),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("quill");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(input.as_os_str())
        .arg("--to")
        .arg("html")
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Georgia"))
        .stdout(predicate::str::contains(".quill-extra-rule { color: teal; }"));
}

#[test]
fn extra_theme_overrides_config() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("post.json");
    fs::write(&input, DRAFT).unwrap();
    fs::write(
        dir.path().join("quill.toml"),
        "[convert.html]\ntheme = \"serif\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("quill");
    cmd.current_dir(dir.path())
        .arg(input.as_os_str())
        .arg("--to")
        .arg("html")
        .arg("--extra-theme")
        .arg("modern");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Helvetica"))
        .stdout(predicate::str::contains("Georgia").not());
}

#[test]
fn preview_fallbacks_from_config_reach_html_and_tag() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.json");
    fs::write(&input, "{}\n").unwrap();
    fs::write(
        dir.path().join("quill.toml"),
        "[preview]\n\
         untitled = \"Draft\"\n\
         uncategorized = \"General\"\n\
         anonymous_author = \"Staff\"\n\
         placeholder = \"Nothing yet\"\n",
    )
    .unwrap();

    let mut html = cargo_bin_cmd!("quill");
    html.current_dir(dir.path())
        .arg(input.as_os_str())
        .arg("--to")
        .arg("html");
    html.assert()
        .success()
        .stdout(predicate::str::contains("<title>Draft</title>"))
        .stdout(predicate::str::contains("General"))
        .stdout(predicate::str::contains("Staff"))
        .stdout(predicate::str::contains("Nothing yet"))
        .stdout(predicate::str::contains("Your Blog Title").not());

    let mut tag = cargo_bin_cmd!("quill");
    tag.current_dir(dir.path())
        .arg(input.as_os_str())
        .arg("--to")
        .arg("tag");
    tag.assert()
        .success()
        .stdout(predicate::str::starts_with("<article>Draft\n"))
        .stdout(predicate::str::contains("<category>General</category>"))
        .stdout(predicate::str::contains("<author>Staff\n"))
        .stdout(predicate::str::contains("<placeholder>Nothing yet</placeholder>"));
}

#[test]
fn unknown_format_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("post.json");
    fs::write(&input, DRAFT).unwrap();

    let mut cmd = cargo_bin_cmd!("quill");
    cmd.current_dir(dir.path())
        .arg(input.as_os_str())
        .arg("--to")
        .arg("pdf");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Format 'pdf' not found"));
}

#[test]
fn generate_css_prints_baseline() {
    let mut cmd = cargo_bin_cmd!("quill");
    cmd.arg("generate-css");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(".quill-document"));
}

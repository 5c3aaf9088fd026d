// mdxsan-core/tests/sanitize_tree_tests.rs
//! End-to-end tests for `sanitize_tree` over a temporary docs directory.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

use mdxsan_core::{sanitize_tree, MdxsanError, RunOptions, SanitizerConfig};

const RELEASE_DOC: &str = "\
---
title: Engine releases
---

# Releases

Intro mentions <Tabs> outside the region and must stay as is.

<!-- RELEASE_NOTES_START -->
## v2.1.0

- Latency improved to <100us
- Use the ``<Timer>`` component and `Vec<u8>` buffers
- Timeouts are now <ms> based, was &lt;s> before
<!-- internal note -->

```rust
if (x < 5) { ... }
```

~~~
let y = a<b;
~~~
<!-- RELEASE_NOTES_END -->

Footer <b>bold</b>.
";

const RELEASE_DOC_SANITIZED: &str = "\
---
title: Engine releases
---

# Releases

Intro mentions <Tabs> outside the region and must stay as is.

<!-- RELEASE_NOTES_START -->
## v2.1.0

- Latency improved to &lt;100us
- Use the ``<Timer>`` component and `Vec<u8>` buffers
- Timeouts are now &lt;ms> based, was &lt;s> before
<!-- internal note -->

```rust
if (x < 5) { ... }
```

~~~
let y = a<b;
~~~
<!-- RELEASE_NOTES_END -->

Footer <b>bold</b>.
";

fn docs_tree() -> Result<TempDir> {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("releases/engine"))?;
    fs::write(dir.path().join("releases/engine/index.md"), RELEASE_DOC)?;
    fs::write(dir.path().join("intro.md"), "# Intro\n\nNo markers, <Foo> stays.\n")?;
    fs::write(dir.path().join("releases/skip.txt"), "RELEASE_NOTES_START\n<x\nRELEASE_NOTES_END\n")?;
    Ok(dir)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test_log::test]
fn sanitizes_release_regions_only() -> Result<()> {
    let dir = docs_tree()?;
    let report = sanitize_tree(dir.path(), &SanitizerConfig::default(), RunOptions::default())?;

    assert_eq!(report.scanned, 2);
    assert_eq!(report.changed_count(), 1);
    assert!(report.is_clean());
    assert!(report.changed[0].path.ends_with("releases/engine/index.md"));
    assert_eq!(report.changed[0].escaped_lines, 2);

    assert_eq!(read(&dir.path().join("releases/engine/index.md")), RELEASE_DOC_SANITIZED);
    assert_eq!(read(&dir.path().join("intro.md")), "# Intro\n\nNo markers, <Foo> stays.\n");
    assert_eq!(
        read(&dir.path().join("releases/skip.txt")),
        "RELEASE_NOTES_START\n<x\nRELEASE_NOTES_END\n"
    );
    Ok(())
}

#[test_log::test]
fn second_run_changes_nothing() -> Result<()> {
    let dir = docs_tree()?;
    let config = SanitizerConfig::default();
    sanitize_tree(dir.path(), &config, RunOptions::default())?;
    let after_first = read(&dir.path().join("releases/engine/index.md"));

    let report = sanitize_tree(dir.path(), &config, RunOptions::default())?;
    assert_eq!(report.changed_count(), 0);
    assert_eq!(read(&dir.path().join("releases/engine/index.md")), after_first);
    Ok(())
}

#[test_log::test]
fn dry_run_reports_without_writing() -> Result<()> {
    let dir = docs_tree()?;
    let options = RunOptions {
        dry_run: true,
        keep_contents: true,
    };
    let report = sanitize_tree(dir.path(), &SanitizerConfig::default(), options)?;

    assert_eq!(report.changed_count(), 1);
    assert_eq!(read(&dir.path().join("releases/engine/index.md")), RELEASE_DOC);
    let contents = report.changed[0].contents.as_ref().expect("contents kept");
    assert_eq!(contents.sanitized, RELEASE_DOC_SANITIZED);
    Ok(())
}

#[test_log::test]
fn crlf_documents_keep_their_bytes() -> Result<()> {
    let dir = tempdir()?;
    let untouched = "a\r\nRELEASE_NOTES_START\r\nnothing to escape\r\nRELEASE_NOTES_END\r\n";
    let escaped = "RELEASE_NOTES_START\r\nv <2\r\nRELEASE_NOTES_END";
    fs::write(dir.path().join("untouched.md"), untouched)?;
    fs::write(dir.path().join("escaped.md"), escaped)?;

    let report = sanitize_tree(dir.path(), &SanitizerConfig::default(), RunOptions::default())?;
    assert_eq!(report.changed_count(), 1);
    assert_eq!(fs::read(dir.path().join("untouched.md"))?, untouched.as_bytes());
    assert_eq!(
        read(&dir.path().join("escaped.md")),
        "RELEASE_NOTES_START\r\nv &lt;2\r\nRELEASE_NOTES_END"
    );
    Ok(())
}

#[test_log::test]
fn unreadable_file_does_not_stop_the_batch() -> Result<()> {
    let dir = tempdir()?;
    // Invalid UTF-8 fails to read as text.
    fs::write(dir.path().join("a_binary.md"), [0xff, 0xfe, 0x00, 0x3c])?;
    fs::write(dir.path().join("b_notes.md"), "RELEASE_NOTES_START\n<x\nRELEASE_NOTES_END")?;

    let report = sanitize_tree(dir.path(), &SanitizerConfig::default(), RunOptions::default())?;
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].path.ends_with("a_binary.md"));
    assert!(matches!(report.failures[0].error, MdxsanError::Io { .. }));
    assert_eq!(report.changed_count(), 1);
    assert_eq!(
        read(&dir.path().join("b_notes.md")),
        "RELEASE_NOTES_START\n&lt;x\nRELEASE_NOTES_END"
    );
    Ok(())
}

#[test_log::test]
fn missing_root_is_fatal() {
    let dir = tempdir().unwrap();
    let err = sanitize_tree(&dir.path().join("docs"), &SanitizerConfig::default(), RunOptions::default())
        .unwrap_err();
    assert!(matches!(err, MdxsanError::RootNotFound(_)));
}

#[test_log::test]
fn custom_markers_from_config() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("notes.mdx"),
        "RELEASE_NOTES_START\n<kept\nBEGIN_NOTES\n<escaped\nEND_NOTES\n",
    )?;
    let config = SanitizerConfig {
        start_marker: "BEGIN_NOTES".into(),
        end_marker: "END_NOTES".into(),
        extensions: vec!["mdx".into()],
    };

    sanitize_tree(dir.path(), &config, RunOptions::default())?;
    assert_eq!(
        read(&dir.path().join("notes.mdx")),
        "RELEASE_NOTES_START\n<kept\nBEGIN_NOTES\n&lt;escaped\nEND_NOTES\n"
    );
    Ok(())
}

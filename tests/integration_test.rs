//! Integration tests for the format-and-insert workflow.
//!
//! Exercises the library pipeline the binary drives: build a request,
//! format it, and splice the result into a document on disk.

use anyhow::Result;
use mdlink::{Document, LinkRequest, Position, format_link};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a markdown file with given content in a temp directory.
fn write_note(dir: &TempDir, content: &str) -> Result<PathBuf> {
    let path = dir.path().join("note.md");
    fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn test_format_and_append_to_document() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let path = write_note(&dir, "# Notes\n")?;
    let request = LinkRequest {
        text: "Example".to_string(),
        url: "https://example.com/".to_string(),
    };

    // Act
    let markdown = format_link(&request).expect("Valid request should format");
    let mut document = Document::load(&path)?;
    document.append(&markdown);
    document.save()?;

    // Assert
    let saved = fs::read_to_string(&path)?;
    assert_eq!(saved, "# Notes\n[Example](https://example.com)\n");
    Ok(())
}

#[test]
fn test_format_and_insert_at_cursor() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let path = write_note(&dir, "intro\nsee  for details\n")?;
    let request = LinkRequest {
        text: "the docs".to_string(),
        url: "https://example.com/docs/".to_string(),
    };

    // Act
    let markdown = format_link(&request).expect("Valid request should format");
    let mut document = Document::load(&path)?;
    document.insert(Position { line: 2, column: 4 }, &markdown)?;
    document.save()?;

    // Assert
    let saved = fs::read_to_string(&path)?;
    assert_eq!(
        saved, "intro\nsee [the docs](https://example.com/docs) for details\n",
        "Link should land at the cursor with the trailing slash stripped"
    );
    Ok(())
}

#[test]
fn test_blank_request_leaves_document_untouched() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let path = write_note(&dir, "original content\n")?;
    let request = LinkRequest {
        text: "   ".to_string(),
        url: "https://example.com".to_string(),
    };

    // Act: the host contract is to write nothing on None
    let result = format_link(&request);

    // Assert
    assert_eq!(result, None);
    let saved = fs::read_to_string(&path)?;
    assert_eq!(saved, "original content\n", "No insertion on blank text");
    Ok(())
}

#[test]
fn test_tracking_query_stripped_end_to_end() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let path = write_note(&dir, "")?;
    let request = LinkRequest {
        text: "Tweet".to_string(),
        url: "https://twitter.com/user/status/123?s=20&t=abc".to_string(),
    };

    // Act
    let markdown = format_link(&request).expect("Valid request should format");
    let mut document = Document::load(&path)?;
    document.append(&markdown);
    document.save()?;

    // Assert
    let saved = fs::read_to_string(&path)?;
    assert_eq!(saved, "[Tweet](https://twitter.com/user/status/123)\n");
    Ok(())
}

#[test]
fn test_malformed_url_inserted_as_typed() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let path = write_note(&dir, "")?;
    let request = LinkRequest {
        text: "Broken".to_string(),
        url: "not a url".to_string(),
    };

    // Act
    let markdown = format_link(&request).expect("Malformed URL must not drop the insertion");
    let mut document = Document::load(&path)?;
    document.append(&markdown);
    document.save()?;

    // Assert
    let saved = fs::read_to_string(&path)?;
    assert_eq!(saved, "[Broken](not a url)\n");
    Ok(())
}

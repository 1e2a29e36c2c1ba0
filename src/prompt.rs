//! Interactive collection of link fields.
//!
//! Stands in for the dialog of a graphical editor: each missing field
//! is asked for on stderr and read as one line from stdin, with Enter
//! confirming the value. Field validation stays out of here; blank
//! answers flow through so the formatter can treat them as a cancelled
//! submission.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::link::LinkRequest;

/// Assembles a link request from flags, prompting for missing fields.
///
/// Fields already supplied on the command line are used as-is; each
/// absent field triggers one interactive prompt. EOF on stdin yields
/// an empty field rather than an error, which downstream formatting
/// treats as "nothing to insert".
///
/// # Arguments
///
/// * `text`: Display text from the command line, if given
/// * `url`: URL from the command line, if given
///
/// # Errors
///
/// Returns error if reading from stdin fails
pub fn collect(text: Option<String>, url: Option<String>) -> Result<LinkRequest> {
    let text = match text {
        Some(text) => text,
        None => read_field("Text")?,
    };

    let url = match url {
        Some(url) => url,
        None => read_field("URL")?,
    };

    Ok(LinkRequest { text, url })
}

/// Prompts for a single field on stderr and reads one stdin line.
fn read_field(label: &str) -> Result<String> {
    let stdin = io::stdin();
    let mut stderr = io::stderr();
    read_field_from(label, &mut stdin.lock(), &mut stderr)
}

/// Prompts on `output` and reads one line from `input`.
///
/// Split out from [`read_field`] so tests can drive it with in-memory
/// buffers instead of the process streams.
fn read_field_from(label: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{label}: ").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {label} from stdin"))?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

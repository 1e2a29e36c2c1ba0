//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for mdlink.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdlink", version, about, long_about = None)]
pub struct Config {
    /// Markdown document to edit (omit to print the link to stdout)
    pub file: Option<PathBuf>,

    /// Link display text (prompted for when omitted)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Link URL (prompted for when omitted)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Cursor position to insert at, as LINE or LINE:COLUMN
    /// (defaults to appending at the end of the document)
    #[arg(long, value_name = "LINE[:COL]")]
    pub at: Option<String>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the target document does not exist, or if a
    /// cursor position is given without a document to edit.
    pub fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            if !file.exists() {
                bail!("Document does not exist: {}", file.display());
            }
        }

        if self.at.is_some() && self.file.is_none() {
            bail!("--at requires a document to edit");
        }

        Ok(())
    }
}

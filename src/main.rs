use anyhow::{Context, Result};
use mdlink::{Config, Document, Position, format_link, is_well_formed, prompt};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    // Resolve the cursor position up front so a bad --at fails before
    // any prompting happens
    let position = config
        .at
        .as_deref()
        .map(Position::parse)
        .transpose()
        .context("Invalid cursor position")?;

    let request = prompt::collect(config.text.clone(), config.url.clone())
        .context("Failed to collect link fields")?;

    // One submission, one formatting call. A blank field means the
    // user cancelled; exit quietly without touching anything.
    let Some(markdown) = format_link(&request) else {
        return Ok(());
    };

    if !is_well_formed(&request.url) {
        eprintln!("Invalid url, inserting as typed: {}", request.url);
    }

    match &config.file {
        Some(path) => {
            let mut document = Document::load(path)?;

            match position {
                Some(position) => document
                    .insert(position, &markdown)
                    .context("Failed to insert link")?,
                None => document.append(&markdown),
            }

            document.save()?;
            println!("Inserted link into {}", path.display());
        }
        None => println!("{markdown}"),
    }

    Ok(())
}

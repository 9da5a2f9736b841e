use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use checkline::cli::{CliArgs, OutputFormat};
use checkline::host::MemoryHost;
use checkline::model::{Row, RowId};
use checkline::runtime::Outline;
use checkline::OutlineConfig;

/// JSON report of the outline after the script ran
#[derive(Serialize)]
struct Report<'a> {
    rows: &'a [Row],
    focused: Option<RowId>,
    /// Rows created over the session, including removed ones
    created: usize,
}

fn main() -> Result<()> {
    checkline::tracing::init();

    let args = CliArgs::parse();
    let startup = args.into_config().map_err(anyhow::Error::msg)?;

    let config = if startup.use_config_file {
        OutlineConfig::load()
    } else {
        OutlineConfig::default()
    };
    if startup.save_config {
        config.save().map_err(anyhow::Error::msg)?;
    }

    let mut outline = Outline::from_contents(startup.rows, &config, MemoryHost::new());
    outline.run_script(&startup.steps);

    match startup.format {
        OutputFormat::Text => {
            println!(
                "{}",
                outline
                    .host()
                    .render(&config.checked_glyph, &config.unchecked_glyph)
            );
        }
        OutputFormat::Json => {
            let document = outline.document();
            let report = Report {
                rows: document.rows(),
                focused: document.focused(),
                created: document.registry().len(),
            };
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize outline")?;
            println!("{}", json);
        }
    }

    Ok(())
}

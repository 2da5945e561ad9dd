use anyhow::{bail, Context, Result};
use chrono::Utc;
use is_terminal::IsTerminal;
use std::io::Read;
use std::path::Path;

use actcard_resolver::{resolve_card, ChannelBlock};
use actcard_types::{Activity, ActivityDocument, FetchError, RemoteData};

use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::presentation::{
    details_view_model, present_card, ConsoleRenderer, DisplayOptions, MarkupViewer,
    TempFileViewer,
};
use crate::types::{ColorMode, OutputFormat};

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    let options = DisplayOptions {
        enable_color: resolve_color(cli.color),
        width: resolve_width(&config),
    };
    let renderer = ConsoleRenderer::new(cli.format, options);

    match cli.command {
        Commands::Card {
            file,
            loading,
            failed,
            status,
        } => {
            let remote = if loading {
                RemoteData::Pending
            } else if let Some(message) = failed {
                RemoteData::Failure(match status {
                    Some(code) => FetchError::with_status(message, code),
                    None => FetchError::new(message),
                })
            } else {
                load_document(file.as_deref())?.into_remote()
            };

            renderer.render_card(&present_card(&remote, today))
        }

        Commands::Details { file, open_markup } => {
            let remote = load_document(file.as_deref())?.into_remote();
            let Some(activity) = remote.success() else {
                // No data yet: the pane shows the same skeleton or error
                // card the feed does.
                return renderer.render_card(&present_card(&remote, today));
            };

            renderer.render_details(&details_view_model(activity, today, &config))?;

            // JSON output stays a single document; the saved-path line is
            // text-mode only.
            if open_markup && cli.format == OutputFormat::Plain {
                match markup_body(activity) {
                    Some(markup) => {
                        let path = TempFileViewer.open(markup)?;
                        renderer.render_markup_saved(&path)?;
                    }
                    None => bail!("Activity has no email or news markup to open"),
                }
            }
            Ok(())
        }

        Commands::Facts { file } => {
            let remote = load_document(file.as_deref())?.into_remote();
            let Some(activity) = remote.success() else {
                bail!("Facts need a settled activity record (document state \"success\")");
            };
            renderer.render_facts(&resolve_card(activity, today))
        }
    }
}

fn resolve_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

fn resolve_width(config: &Config) -> usize {
    if let Some(width) = config.display.width {
        return width;
    }
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(80)
}

fn load_document(path: Option<&Path>) -> Result<ActivityDocument> {
    match path {
        Some(path) if path.as_os_str() != "-" => ActivityDocument::load(path)
            .with_context(|| format!("Failed to read activity from {}", path.display())),
        _ => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .context("Failed to read activity JSON from stdin")?;
            ActivityDocument::parse(&json).context("Failed to parse activity JSON from stdin")
        }
    }
}

fn markup_body(activity: &Activity) -> Option<&str> {
    match actcard_resolver::channel_block(activity)? {
        ChannelBlock::Markup { markup, .. } => Some(markup),
        _ => None,
    }
}

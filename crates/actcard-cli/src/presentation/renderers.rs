use anyhow::Result;
use std::path::Path;

use actcard_resolver::PresentationFacts;

use crate::presentation::view_models::{CardViewState, DetailsViewModel, DisplayOptions};
use crate::presentation::views::{CardView, DetailsView};
use crate::types::OutputFormat;

/// Takes finished view models and writes them to stdout, switching between
/// JSON and the text views.
pub struct ConsoleRenderer {
    format: OutputFormat,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, options: DisplayOptions) -> Self {
        Self { format, options }
    }

    pub fn render_card(&self, state: &CardViewState) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(state)?),
            OutputFormat::Plain => print!("{}", CardView::new(state, &self.options)),
        }
        Ok(())
    }

    pub fn render_details(&self, details: &DetailsViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(details)?),
            OutputFormat::Plain => print!("{}", DetailsView::new(details, &self.options)),
        }
        Ok(())
    }

    /// Raw resolver output. Always JSON: this is the machine-facing surface,
    /// whatever --format says.
    pub fn render_facts(&self, facts: &PresentationFacts) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(facts)?);
        Ok(())
    }

    pub fn render_markup_saved(&self, path: &Path) -> Result<()> {
        println!("Markup saved to {}", path.display());
        Ok(())
    }
}

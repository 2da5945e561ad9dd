//! Fully resolved render inputs.
//!
//! Every field here is display text in its final form. Views and the JSON
//! renderer consume these without touching the activity record or the
//! catalog again.

use serde::Serialize;

/// Display formatting options
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub enable_color: bool,
    pub width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            width: 80,
        }
    }
}

/// Accent the chip renders with. Meaning is fixed here; each surface maps
/// accents to its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipAccent {
    Success,
    Danger,
    Warning,
    Neutral,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChipViewModel {
    pub accent: ChipAccent,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeadlineViewModel {
    pub label: String,
    pub overdue: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_subtype: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chip: Option<ChipViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DeadlineViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// One card render, covering the whole fetch lifecycle. Initial and pending
/// fetches both draw the skeleton; a failed fetch draws the error card.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CardViewState {
    Skeleton,
    Error { message: String },
    Ready(CardViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailsViewModel {
    pub card: CardViewModel,
    pub sections: Vec<SectionViewModel>,
}

/// One details row, text fully composed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionViewModel {
    Client {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        profile_url: Option<String>,
    },
    PayoutSummary {
        type_line: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
    Outcome {
        #[serde(skip_serializing_if = "Option::is_none")]
        visit: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        contact_result: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Address {
        address: String,
    },
    Message {
        text: String,
    },
    PayoutOrder {
        #[serde(skip_serializing_if = "Option::is_none")]
        header: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        agreement: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sum: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        security: Option<String>,
    },
    Markup {
        preview: String,
        hint: String,
    },
    Owner {
        name: String,
    },
    Created {
        line: String,
    },
}

impl SectionViewModel {
    /// Gutter icon key, matching the desk's icon set. The created row is a
    /// bare caption and has none.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            SectionViewModel::Client { .. } => Some("info"),
            SectionViewModel::PayoutSummary { .. } => Some("info_outlined"),
            SectionViewModel::Outcome { .. } => Some("notes"),
            SectionViewModel::Address { .. } => Some("place"),
            SectionViewModel::Message { .. } => Some("notes"),
            SectionViewModel::PayoutOrder { .. } => Some("swap_horiz"),
            SectionViewModel::Markup { .. } => Some("attach_file"),
            SectionViewModel::Owner { .. } => Some("person"),
            SectionViewModel::Created { .. } => None,
        }
    }
}

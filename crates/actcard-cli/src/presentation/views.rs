use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{
    CardViewModel, CardViewState, ChipAccent, DetailsViewModel, DisplayOptions, SectionViewModel,
};

const SKELETON_BAR_MAX: usize = 40;
const SECTION_INDENT: &str = "   ";

/// Terminal glyph for a channel icon key.
fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "phone" => "📞",
        "people" => "👥",
        "mail_outline" => "✉",
        "sms_outlined" => "💬",
        "info_outlined" => "ℹ",
        "payment" => "💳",
        "receipt" => "🧾",
        _ => "•",
    }
}

fn subtype_glyph(subtype: &str) -> &'static str {
    match subtype {
        "call_received" => "↙",
        "call_made" => "↗",
        _ => "",
    }
}

fn section_glyph(icon: &str) -> &'static str {
    match icon {
        "info" | "info_outlined" => "ℹ",
        "notes" => "📝",
        "place" => "📍",
        "swap_horiz" => "⇄",
        "attach_file" => "📎",
        "person" => "👤",
        _ => "•",
    }
}

// --------------------------------------------------------
// Card View
// --------------------------------------------------------

pub struct CardView<'a> {
    state: &'a CardViewState,
    options: &'a DisplayOptions,
}

impl<'a> CardView<'a> {
    pub fn new(state: &'a CardViewState, options: &'a DisplayOptions) -> Self {
        Self { state, options }
    }

    fn render_skeleton(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Same silhouette as the desk's loading shimmer: a long bar for the
        // title row, a shorter one for the caption row.
        let width = self.options.width.min(SKELETON_BAR_MAX);
        writeln!(f, "{}", "░".repeat(width))?;
        writeln!(f, "{}", "░".repeat(width * 2 / 3))?;
        Ok(())
    }

    fn render_error(&self, f: &mut fmt::Formatter, message: &str) -> fmt::Result {
        if self.options.enable_color {
            writeln!(f, "⚠ {}", message.red())
        } else {
            writeln!(f, "⚠ {}", message)
        }
    }

    fn render_ready(&self, f: &mut fmt::Formatter, card: &CardViewModel) -> fmt::Result {
        let glyph = card.icon.map(icon_glyph).unwrap_or("•");
        let subtype = card.icon_subtype.map(subtype_glyph).unwrap_or("");
        let title = truncate(&card.title, self.options.width.saturating_sub(8).max(16));

        write!(f, "{}{} ", glyph, subtype)?;
        if self.options.enable_color {
            write!(f, "{}", title.bold())?;
        } else {
            write!(f, "{}", title)?;
        }
        if let Some(chip) = &card.chip {
            write!(f, "  {}", self.paint_chip(&chip.label, chip.accent))?;
        }
        writeln!(f)?;

        let mut caption: Vec<String> = Vec::new();
        if let Some(tooltip) = &card.tooltip {
            caption.push(tooltip.clone());
        }
        if let Some(timestamp) = &card.timestamp {
            caption.push(timestamp.clone());
        }
        if let Some(deadline) = &card.deadline {
            caption.push(self.paint_deadline(&deadline.label, deadline.overdue));
        }
        if !caption.is_empty() {
            let line = caption.join(" · ");
            if self.options.enable_color {
                writeln!(f, "{}{}", SECTION_INDENT, line.dimmed())?;
            } else {
                writeln!(f, "{}{}", SECTION_INDENT, line)?;
            }
        }

        Ok(())
    }

    fn paint_chip(&self, label: &str, accent: ChipAccent) -> String {
        if !self.options.enable_color {
            return format!("[{}]", label);
        }
        match accent {
            ChipAccent::Success => format!("[{}]", label.green()),
            ChipAccent::Danger => format!("[{}]", label.red()),
            ChipAccent::Warning => format!("[{}]", label.yellow()),
            ChipAccent::Neutral => format!("[{}]", label.bright_black()),
        }
    }

    fn paint_deadline(&self, label: &str, overdue: bool) -> String {
        if !self.options.enable_color {
            return label.to_string();
        }
        if overdue {
            format!("{}", label.red())
        } else {
            format!("{}", label.yellow())
        }
    }
}

impl<'a> fmt::Display for CardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.state {
            CardViewState::Skeleton => self.render_skeleton(f),
            CardViewState::Error { message } => self.render_error(f, message),
            CardViewState::Ready(card) => self.render_ready(f, card),
        }
    }
}

// --------------------------------------------------------
// Details View
// --------------------------------------------------------

pub struct DetailsView<'a> {
    data: &'a DetailsViewModel,
    options: &'a DisplayOptions,
}

impl<'a> DetailsView<'a> {
    pub fn new(data: &'a DetailsViewModel, options: &'a DisplayOptions) -> Self {
        Self { data, options }
    }

    fn render_section(&self, f: &mut fmt::Formatter, section: &SectionViewModel) -> fmt::Result {
        let glyph = section.icon().map(section_glyph).unwrap_or(" ");

        match section {
            SectionViewModel::Client {
                name,
                phone,
                profile_url,
            } => {
                writeln!(f, "{} Клиент: {}", glyph, name)?;
                if let Some(phone) = phone {
                    writeln!(f, "{}Номер: {}", SECTION_INDENT, phone)?;
                }
                if let Some(url) = profile_url {
                    if self.options.enable_color {
                        writeln!(f, "{}→ {}", SECTION_INDENT, url.bright_cyan())?;
                    } else {
                        writeln!(f, "{}→ {}", SECTION_INDENT, url)?;
                    }
                }
            }
            SectionViewModel::PayoutSummary { type_line, detail } => {
                writeln!(f, "{} {}", glyph, type_line)?;
                if let Some(detail) = detail {
                    writeln!(f, "{}{}", SECTION_INDENT, detail)?;
                }
            }
            SectionViewModel::Outcome {
                visit,
                contact_result,
                description,
            } => {
                let mut first: Vec<&str> = Vec::new();
                if let Some(visit) = visit {
                    first.push(visit);
                }
                if let Some(contact_result) = contact_result {
                    first.push(contact_result);
                }
                if first.is_empty() {
                    if let Some(description) = description {
                        writeln!(f, "{} {}", glyph, description)?;
                    }
                } else {
                    writeln!(f, "{} {}", glyph, first.join(" "))?;
                    if let Some(description) = description {
                        writeln!(f, "{}{}", SECTION_INDENT, description)?;
                    }
                }
            }
            SectionViewModel::Address { address } => {
                writeln!(f, "{} {}", glyph, address)?;
            }
            SectionViewModel::Message { text } => {
                writeln!(f, "{} {}", glyph, text)?;
            }
            SectionViewModel::PayoutOrder {
                header,
                agreement,
                sum,
                security,
            } => {
                if let Some(header) = header {
                    writeln!(f, "{} {}", glyph, header)?;
                } else {
                    writeln!(f, "{}", glyph)?;
                }
                if let Some(agreement) = agreement {
                    writeln!(f, "{}{}", SECTION_INDENT, agreement)?;
                }
                if let Some(sum) = sum {
                    if self.options.enable_color {
                        writeln!(f, "{}{}", SECTION_INDENT, sum.bold())?;
                    } else {
                        writeln!(f, "{}{}", SECTION_INDENT, sum)?;
                    }
                }
                if let Some(security) = security {
                    writeln!(f, "{}{}", SECTION_INDENT, security)?;
                }
            }
            SectionViewModel::Markup { preview, hint } => {
                writeln!(f, "{} {}", glyph, preview)?;
                if self.options.enable_color {
                    writeln!(f, "{}{}", SECTION_INDENT, hint.bright_cyan())?;
                } else {
                    writeln!(f, "{}{}", SECTION_INDENT, hint)?;
                }
            }
            SectionViewModel::Owner { name } => {
                writeln!(f, "{} {}", glyph, name)?;
            }
            SectionViewModel::Created { line } => {
                if self.options.enable_color {
                    writeln!(f, "{}{}", SECTION_INDENT, line.dimmed())?;
                } else {
                    writeln!(f, "{}{}", SECTION_INDENT, line)?;
                }
            }
        }

        Ok(())
    }
}

impl<'a> fmt::Display for DetailsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let card = CardViewState::Ready(self.data.card.clone());
        write!(f, "{}", CardView::new(&card, self.options))?;
        writeln!(f, "{}", "─".repeat(self.options.width.min(SKELETON_BAR_MAX)))?;

        for (index, section) in self.data.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            self.render_section(f, section)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{ChipViewModel, DeadlineViewModel};

    fn plain() -> DisplayOptions {
        DisplayOptions {
            enable_color: false,
            width: 80,
        }
    }

    fn card_model() -> CardViewModel {
        CardViewModel {
            icon: Some("phone"),
            icon_subtype: Some("call_received"),
            tooltip: Some("Входящий звонок".to_string()),
            title: "Телефонный звонок".to_string(),
            chip: Some(ChipViewModel {
                accent: ChipAccent::Warning,
                label: "КВП".to_string(),
            }),
            deadline: Some(DeadlineViewModel {
                label: "Остался 1 день".to_string(),
                overdue: false,
            }),
            timestamp: Some("11 января 2018 в 09:30".to_string()),
        }
    }

    #[test]
    fn test_skeleton_draws_two_bars() {
        let options = plain();
        let rendered = CardView::new(&CardViewState::Skeleton, &options).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].chars().all(|c| c == '░'));
        assert!(lines[1].len() < lines[0].len());
    }

    #[test]
    fn test_error_card_prefixes_a_warning_sign() {
        let options = plain();
        let state = CardViewState::Error {
            message: "HTTP 502: Сервис недоступен".to_string(),
        };
        let rendered = CardView::new(&state, &options).to_string();
        assert_eq!(rendered, "⚠ HTTP 502: Сервис недоступен\n");
    }

    #[test]
    fn test_ready_card_lays_out_title_chip_and_caption() {
        let options = plain();
        let state = CardViewState::Ready(card_model());
        let rendered = CardView::new(&state, &options).to_string();

        assert_eq!(
            rendered,
            "📞↙ Телефонный звонок  [КВП]\n   Входящий звонок · 11 января 2018 в 09:30 · Остался 1 день\n"
        );
    }

    #[test]
    fn test_narrow_width_truncates_the_title() {
        let options = DisplayOptions {
            enable_color: false,
            width: 24,
        };
        let mut model = card_model();
        model.title = "Очень длинная тема активности".to_string();
        model.chip = None;
        model.deadline = None;
        model.tooltip = None;
        model.timestamp = None;

        let rendered = CardView::new(&CardViewState::Ready(model), &options).to_string();
        assert!(rendered.contains("..."));
    }

    #[test]
    fn test_details_view_renders_sections_in_order() {
        let data = DetailsViewModel {
            card: CardViewModel {
                icon: Some("people"),
                icon_subtype: None,
                tooltip: None,
                title: "Встреча".to_string(),
                chip: None,
                deadline: None,
                timestamp: None,
            },
            sections: vec![
                SectionViewModel::Client {
                    name: "Васильев Клиент Иванович".to_string(),
                    phone: Some("+7 919 455-70-07".to_string()),
                    profile_url: None,
                },
                SectionViewModel::Address {
                    address: "Улица Пушкина, дом 1".to_string(),
                },
                SectionViewModel::Created {
                    line: "Создана Петров Оператор 1 января 2018 в 00:00".to_string(),
                },
            ],
        };

        let options = plain();
        let rendered = DetailsView::new(&data, &options).to_string();
        let expected = "\
👥 Встреча
────────────────────────────────────────
ℹ Клиент: Васильев Клиент Иванович
   Номер: +7 919 455-70-07

📍 Улица Пушкина, дом 1

   Создана Петров Оператор 1 января 2018 в 00:00
";
        assert_eq!(rendered, expected);
    }
}

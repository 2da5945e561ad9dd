//! # Presentation Layer
//!
//! Everything between a resolved activity and the terminal. The data flow is
//! strictly unidirectional:
//!
//! ```text
//! [ Command ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!                  (catalog +                           (Driver)   ==(Text)==> [ View ] --> Output
//!                   formatting)                                                  (Layout)
//! ```
//!
//! ## Directory Guide
//!
//! * `presenters` - Convert resolver facts into view models. All catalog
//!   lookups and text formatting happen here, exactly once; downstream the
//!   text is final.
//! * `view_models` - Pure data containers, `Serialize` for the JSON surface.
//! * `views` - `fmt::Display` structs. Layout, indentation and color only;
//!   they never compose new text.
//! * `renderers` - Switch a view model between JSON and text output.
//! * `formatters` - Reusable string helpers (dates, money, phone numbers),
//!   called by presenters.
//! * `i18n` - The Russian message catalog the presenters resolve keys
//!   against.
//! * `markup` - Where "open the email/news markup" lands on a terminal.

pub mod formatters;
pub mod i18n;
pub mod markup;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

// Re-exports for convenience
pub use markup::{MarkupViewer, TempFileViewer};
pub use presenters::{card_view_model, details_view_model, present_card};
pub use renderers::ConsoleRenderer;
pub use view_models::{CardViewState, DisplayOptions};

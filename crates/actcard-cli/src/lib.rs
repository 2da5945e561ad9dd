// NOTE: actcard Architecture Rationale
//
// Why Resolve-Then-Render (not render from the record)?
// - Every display decision (icon, chip, deadline, section order) is settled
//   once in actcard-resolver; both output formats consume the same facts
// - The JSON surface stays host-agnostic: keys and enums, no Russian text
// - Rendering bugs stay in one layer; resolution rules stay testable as
//   pure functions
//
// Why Keys-Plus-Catalog (not baked-in strings)?
// - The resolver emits catalog keys exactly as the desk backend spells them,
//   so its output maps onto any host's translation table
// - Literal operator text (subjects, statuses, descriptions) passes through
//   untouched and is never run through the catalog
// - Trade-off: the CLI carries its own small Russian catalog for text mode
//
// Why Document States (not just activity JSON)?
// - Input documents carry the fetch lifecycle (initial/pending/failure/
//   success), so the card can be exercised in every state it has on the desk
// - A bare activity record still parses, as the common case

mod args;
mod commands;
pub mod config;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;

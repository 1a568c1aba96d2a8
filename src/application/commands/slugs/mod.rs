// src/application/commands/slugs/mod.rs
mod service;
mod session;

pub use service::SlugCommandService;
pub use session::{CheckOutcome, CheckTicket, SlugFieldSession, SlugFieldUpdate, SlugMode};

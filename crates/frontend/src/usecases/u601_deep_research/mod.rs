pub mod api;
pub mod model;
pub mod state;
pub mod ui;

pub use model::{QueryDraft, ValidationError};
pub use state::{RequestState, ResearchError, NO_SUMMARY_PLACEHOLDER};

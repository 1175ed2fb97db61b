pub mod badge;
pub mod button;
pub mod textarea;

pub use badge::{Badge, BadgeVariant};
pub use button::Button;
pub use textarea::Textarea;

//! Rendering for the Nation Mind landing page: the backend status probe,
//! the page chrome around it, and the nation card.

mod card;
mod page;
mod probe;
mod status;

pub use card::NationCard;
pub use page::{HomePage, STATUS_LABEL, SUBTITLE, TITLE, render_page};
pub use probe::StatusProbe;
pub use status::StatusMessage;

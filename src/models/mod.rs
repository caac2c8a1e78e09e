pub mod app_state;
pub mod approval;
pub mod calendar;
pub mod chat;
pub mod dashboard;
pub mod error;
pub mod invitation;
pub mod listing;
pub mod message;
pub mod notification;
pub mod preferences;
pub mod profile;
pub mod quotation;
pub mod requirements;
pub mod rfq;
pub mod sample;
pub mod supplier;
pub mod task;
pub mod team;
pub mod template;
pub mod view;

pub use app_state::AppState;
pub use error::ValidationError;
pub use listing::{ListState, SortDirection};
pub use view::{NavSection, View, NAV_SECTIONS};

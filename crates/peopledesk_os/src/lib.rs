#![forbid(unsafe_code)]

pub mod certification;
pub mod dashboard;
pub mod entity_page;
pub mod error;
pub mod navigation;
pub mod notice;
pub mod portal;
pub mod profile;
pub mod profile_menu;
pub mod rollon;
pub mod session;
pub mod training_attended;
pub mod training_imparted;

pub use error::PortalError;

#![forbid(unsafe_code)]

pub mod attendees;
pub mod display;
pub mod nav_view;

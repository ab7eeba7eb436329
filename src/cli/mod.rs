//! Terminal front end

pub mod convert;
pub mod setup;
pub mod table;
pub mod ui;

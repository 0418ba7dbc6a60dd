pub mod command;
pub mod footer;
pub mod header;
pub mod help;
pub mod highlight;
pub mod layout;
pub mod list;
pub mod popup;

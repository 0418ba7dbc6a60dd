pub mod app_state;
pub mod collection;
pub mod gesture;
pub mod item;
pub mod mode;
pub mod search;
pub mod viewport;

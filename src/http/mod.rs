pub mod builder;
pub mod example;

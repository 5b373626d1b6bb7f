pub mod agents;
pub mod book;
pub mod generate;
pub mod output;

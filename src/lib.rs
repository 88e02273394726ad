pub mod core;
pub mod books;
pub mod catalog;
pub mod utils;

pub mod args;
pub mod menu;
pub mod print;

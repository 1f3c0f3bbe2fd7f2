pub mod backdrop;
pub mod types;

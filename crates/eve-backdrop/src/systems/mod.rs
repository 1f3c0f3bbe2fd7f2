pub mod decor;
pub mod render;
pub mod snake;
pub mod wander;

mod handler;

pub use handler::{health, home};

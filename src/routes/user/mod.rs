mod handler;
mod model;

pub use handler::{add_user, list_users};
pub use model::{User, UserInfo};

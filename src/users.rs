mod user;
mod user_id;

pub use self::{user::User, user_id::UserId};

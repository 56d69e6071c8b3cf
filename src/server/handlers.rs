mod status_get;
mod surprises_create;
mod surprises_delete;
mod surprises_reveal;
mod surprises_update;
mod user_surprises_get;
mod user_surprises_list;

pub use self::{
    status_get::status_get,
    surprises_create::surprises_create,
    surprises_delete::surprises_delete,
    surprises_reveal::{surprises_reveal, surprises_unlock},
    surprises_update::surprises_update,
    user_surprises_get::user_surprises_get,
    user_surprises_list::user_surprises_list,
};

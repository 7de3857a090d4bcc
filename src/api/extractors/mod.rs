//! Custom request extractors.

mod current_account;
mod path_param;
mod validated_json;

pub use current_account::CurrentAccount;
pub use path_param::PathParam;
pub use validated_json::ValidatedJson;

pub mod me_response;
pub mod update_names_request;
#[allow(clippy::module_inception)]
pub mod users;

pub mod auth;
pub mod deadline;
pub mod error;
pub mod extractors;
pub mod users;

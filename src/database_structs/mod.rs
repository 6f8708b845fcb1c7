mod builder;
mod connection_info;
mod database;

pub use builder::Builder;
pub use connection_info::ConnectionInfo;
pub use database::Database;

pub mod browse;
pub mod context;
pub mod library;
pub mod list;
pub mod users;

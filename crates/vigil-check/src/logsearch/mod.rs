pub mod aggregate;
pub mod query;
pub mod window;

// Database service module
// SQLite connection and schema for the planner's key-value table

mod connection;
mod schema;

pub use connection::Database;

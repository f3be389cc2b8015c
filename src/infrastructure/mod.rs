pub mod file;
pub mod ids;
pub mod memory;
pub mod sqlite;

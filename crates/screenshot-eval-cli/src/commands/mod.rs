pub mod analyze;
pub mod list;

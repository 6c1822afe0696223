//! Domain-level frontend features and their shared logic. Routes import
//! these modules to keep view code focused; session handling stays in its
//! dedicated feature area.

pub mod courses;
pub mod expenses;
pub mod messages;
pub mod records;
pub mod reviews;
pub mod session;
pub mod teachers;

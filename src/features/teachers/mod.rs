pub mod types;

pub use types::Teacher;

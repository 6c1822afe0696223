pub mod types;

pub use types::Review;

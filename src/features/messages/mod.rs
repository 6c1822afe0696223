pub mod types;

pub use types::EnquiryMessage;

pub mod fields;
pub mod handler;
pub mod parser;

pub use handler::{FormSubmissionHandler, HandlerResponse, SubmissionEvent};

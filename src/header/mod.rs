pub mod operation;
pub mod processor;

pub use operation::HeaderOperation;
pub use processor::HeaderProcessor;

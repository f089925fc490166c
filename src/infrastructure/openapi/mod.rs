//! Spec path processing and the collaborators it is handed

pub mod file_loader;
pub mod processor;
pub mod resolver;

pub use file_loader::FileSpecLoader;
pub use processor::PathProcessor;
pub use resolver::DocumentResolver;

mod deadline;
mod error;
mod extractors;

// Service exports
pub mod parameter_store;

pub use parameter_store::{ArtifactPaths, LoadError, LoadedParameters, ParameterStore};

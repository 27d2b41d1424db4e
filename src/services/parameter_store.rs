use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use crate::core::regression::{LinearModel, Regressor};
use crate::models::{ColumnsDocument, FeatureSchema, SchemaError};

/// Errors that can occur while loading model artifacts
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid feature schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("model expects {model} features but schema has {schema} columns")]
    DimensionMismatch { model: usize, schema: usize },
}

/// Locations of the two persisted artifacts
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub columns: PathBuf,
}

impl ArtifactPaths {
    pub fn new(model: impl Into<PathBuf>, columns: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            columns: columns.into(),
        }
    }

    /// Both artifacts inside one directory
    pub fn in_dir(dir: impl AsRef<Path>, model_file: &str, columns_file: &str) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(model_file), dir.join(columns_file))
    }
}

/// Schema and model, immutable once loaded
pub struct LoadedParameters {
    schema: FeatureSchema,
    model: Arc<dyn Regressor>,
}

impl LoadedParameters {
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn model(&self) -> &dyn Regressor {
        self.model.as_ref()
    }
}

impl std::fmt::Debug for LoadedParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedParameters")
            .field("schema", &self.schema)
            .field("model_features", &self.model.n_features())
            .finish()
    }
}

/// Where a store's parameters come from
enum Source {
    /// Read from disk on first load
    Artifacts {
        paths: ArtifactPaths,
        state: OnceCell<LoadedParameters>,
    },
    /// Supplied in memory at construction
    Preloaded(LoadedParameters),
}

/// Holds the feature schema and the trained model for the process lifetime
///
/// Disk loading is gated by a [`OnceCell`]: the first successful [`load`]
/// wins and every later call returns the same parameters without touching
/// disk.
///
/// [`load`]: ParameterStore::load
pub struct ParameterStore {
    source: Source,
}

impl ParameterStore {
    /// Create an empty store that reads from `paths` on first load
    pub fn new(paths: ArtifactPaths) -> Self {
        Self {
            source: Source::Artifacts {
                paths,
                state: OnceCell::new(),
            },
        }
    }

    /// Create a store that is already populated
    pub fn preloaded(schema: FeatureSchema, model: Arc<dyn Regressor>) -> Result<Self, LoadError> {
        let params = build_parameters(schema, model)?;
        Ok(Self {
            source: Source::Preloaded(params),
        })
    }

    /// Load both artifacts if not already loaded
    pub fn load(&self) -> Result<&LoadedParameters, LoadError> {
        match &self.source {
            Source::Artifacts { paths, state } => state.get_or_try_init(|| load_artifacts(paths)),
            Source::Preloaded(params) => Ok(params),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.parameters().is_some()
    }

    /// Loaded parameters, `None` before a successful load
    pub fn parameters(&self) -> Option<&LoadedParameters> {
        match &self.source {
            Source::Artifacts { state, .. } => state.get(),
            Source::Preloaded(params) => Some(params),
        }
    }

    /// Known location names; empty until loaded
    pub fn locations(&self) -> &[String] {
        self.parameters()
            .map(|params| params.schema.locations())
            .unwrap_or(&[])
    }
}

fn load_artifacts(paths: &ArtifactPaths) -> Result<LoadedParameters, LoadError> {
    let model: LinearModel = read_json(&paths.model)?;
    tracing::info!(
        "Model loaded from {} ({} features)",
        paths.model.display(),
        model.n_features()
    );

    let document: ColumnsDocument = read_json(&paths.columns)?;
    let schema = FeatureSchema::new(document.data_columns)?;
    tracing::info!(
        "Feature schema loaded from {} ({} locations)",
        paths.columns.display(),
        schema.locations().len()
    );

    build_parameters(schema, Arc::new(model))
}

fn build_parameters(
    schema: FeatureSchema,
    model: Arc<dyn Regressor>,
) -> Result<LoadedParameters, LoadError> {
    if model.n_features() != schema.len() {
        return Err(LoadError::DimensionMismatch {
            model: model.n_features(),
            schema: schema.len(),
        });
    }
    Ok(LoadedParameters { schema, model })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

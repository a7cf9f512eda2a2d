use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source not found: {}: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Schema error: {0}")]
    SchemaError(String),
    #[error("Invalid mode: {0}")]
    InvalidMode(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}

//! Error types for KMZ export.

use thiserror::Error;

/// Boxed error returned by a [`Rasterizer`](crate::export::Rasterizer).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while exporting a layer.
///
/// Building the KML document never fails; only rendering symbol images and
/// writing the archive can.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to rasterize symbol {token}: {source}")]
    Rasterize {
        token: String,
        #[source]
        source: BoxError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

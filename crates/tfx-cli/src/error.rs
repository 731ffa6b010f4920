use thiserror::Error;

#[derive(Error, Debug)]
pub enum TfxError {
    #[error(transparent)]
    Manifest(#[from] tfx_manifest::ManifestError),

    #[error(transparent)]
    Version(#[from] tfx_version::VersionError),

    #[error("validation failed with {0} violation(s)")]
    ValidationFailed(usize),
}

pub type Result<T> = std::result::Result<T, TfxError>;

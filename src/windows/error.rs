#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Sspi(#[from] windows::core::Error),
    #[error("target name contains a NUL character")]
    NulInTargetName,
    #[error("security package name is not valid UTF-16")]
    InvalidPackageName,
}

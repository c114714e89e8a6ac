use thiserror::Error;
use vita_traits::PlatformError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Tracker is already mounted")]
    AlreadyMounted,

    #[error("Tracker was unmounted and cannot be reused")]
    Unmounted,

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),
}

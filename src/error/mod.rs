use crate::session::SessionError;
use crate::theme::ThemeError;
use crate::vfs::VfsError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Vfs(#[from] VfsError),
}

use crate::screen::ScreenError;
use std::path::PathBuf;
use thiserror::Error;

pub type AutoclickResult<T> = Result<T, AutoclickError>;

#[derive(Debug, Error)]
pub enum AutoclickError {
    #[error("Template image '{}' not found", .path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to load template '{}': {}", .path.display(), .source)]
    TemplateLoadFailed {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error(transparent)]
    Screen(#[from] ScreenError),

    #[error("Failed to render preview: {source}")]
    PreviewFailed {
        #[from]
        source: image::ImageError,
    },
}

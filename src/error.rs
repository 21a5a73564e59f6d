use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("view `{0}` is already registered")]
    DuplicateView(String),

    #[error("view `{view_id}` failed to render: {message}")]
    ViewRender { view_id: String, message: String },

    #[error("failed to load dataset: {0}")]
    Load(String),
}

mod app_error;

pub use app_error::{AppError, DATABASE_ERROR};

pub type Result<T> = std::result::Result<T, AppError>;

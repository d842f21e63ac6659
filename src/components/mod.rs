//! Shared UI components

pub mod backend_warning_banner;
pub mod icons;

pub use backend_warning_banner::{
    BackendWarningBanner, BACKEND_START_COMMAND, DEFAULT_BACKEND_MESSAGE,
};
pub use icons::AlertTriangleIcon;

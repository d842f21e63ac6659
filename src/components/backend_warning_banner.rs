//! Warning banner shown when the BirdNET analysis backend is unreachable.

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Body text shown when no explicit message is supplied.
pub const DEFAULT_BACKEND_MESSAGE: &str =
    "Cannot connect to the BirdNET analysis backend. Please ensure the backend service is running.";

/// Command suggested to the user for bringing the backend back up.
pub const BACKEND_START_COMMAND: &str = "docker-compose up backend";

/// Full-width amber warning banner with icon, heading, message, and a
/// remediation hint.
///
/// The host view mounts it when it cannot reach the analysis backend.
/// `message` carries the connection error detail; when absent or empty the
/// banner shows [`DEFAULT_BACKEND_MESSAGE`] instead.
#[component]
pub fn BackendWarningBanner(
    /// Connection error detail to display (default message shown when absent or empty)
    #[props(default)]
    message: Option<String>,
) -> Element {
    let body = body_text(message.as_deref());

    rsx! {
        div { class: "w-full bg-yellow-50 dark:bg-yellow-900/20 border-b border-yellow-200 dark:border-yellow-800",
            div { class: "max-w-7xl mx-auto px-4 py-3 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between flex-wrap",
                    div { class: "flex items-center flex-1",
                        span { class: "flex p-2 rounded-lg bg-yellow-100 dark:bg-yellow-800",
                            AlertTriangleIcon { class: "h-5 w-5 text-yellow-600 dark:text-yellow-300" }
                        }
                        div { class: "ml-3",
                            h3 { class: "text-sm font-medium text-yellow-800 dark:text-yellow-200",
                                "Backend Connection Issue"
                            }
                            p { class: "mt-1 text-sm text-yellow-700 dark:text-yellow-300", "{body}" }
                            p { class: "mt-1 text-xs text-yellow-600 dark:text-yellow-400",
                                "Try running: "
                                code { class: "bg-yellow-100 dark:bg-yellow-800 px-1 py-0.5 rounded",
                                    "{BACKEND_START_COMMAND}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// An empty message means the caller had no detail to show, same as absent.
fn body_text(message: Option<&str>) -> &str {
    match message {
        Some(m) if !m.is_empty() => m,
        _ => DEFAULT_BACKEND_MESSAGE,
    }
}

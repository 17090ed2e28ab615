//! Presentational building blocks shared by every view.

mod button;
mod card;
mod input;

pub use button::{Button, ButtonVariant};
pub use card::{Card, CardHeader, ErrorBanner};
pub use input::{Input, Select, SelectOption};

/// Show a blocking message to the user.
///
/// Uses `window.alert` in the browser; elsewhere the message is only logged.
pub fn alert(message: &str) {
    tracing::warn!("{}", message);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

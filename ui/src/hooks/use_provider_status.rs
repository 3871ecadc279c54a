use api::ApiError;
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Debug, strum::EnumIs)]
pub enum ProviderConnectionStatus {
    Connected,
    Disconnected(String),
}

#[derive(Clone, Copy)]
pub struct ProviderChecker {
    status: Signal<ProviderConnectionStatus>,
}

impl ProviderChecker {
    /// Inspects a Result from an API call.
    /// - If `Ok`: flips status back to Connected (if previously disconnected) and returns the value.
    /// - If `Err`: records Disconnected when the failure looks transport-shaped. Returns None.
    pub fn check<T>(&mut self, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(val) => {
                // If we were disconnected, we are back now.
                if matches!(
                    *self.status.peek(),
                    ProviderConnectionStatus::Disconnected(_)
                ) {
                    self.status.set(ProviderConnectionStatus::Connected);
                }
                Some(val)
            }
            Err(e) => {
                let error_msg = e.to_string();
                dioxus_logger::tracing::warn!("provider error: {}", error_msg);

                if is_connection_error(&error_msg) {
                    self.status
                        .set(ProviderConnectionStatus::Disconnected(error_msg));
                }
                None
            }
        }
    }
}

/// Heuristic: does this message describe the provider endpoint or the
/// fullstack transport being unreachable, rather than a logic error?
fn is_connection_error(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    msg.contains("connection refused")
        || msg.contains("connection reset")
        || msg.contains("broken pipe")
        || msg.contains("network unreachable")
        || msg.contains("timed out")
        || msg.contains("dns error")
        || msg.contains("failed to connect")
        // Dioxus/Hyper specific transport errors
        || msg.contains("error running server function")
        || msg.contains("channel closed")
}

pub fn use_provider_status() -> ProviderChecker {
    let status = use_context::<Signal<ProviderConnectionStatus>>();
    ProviderChecker { status }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_are_connection_errors() {
        assert!(is_connection_error("Connection refused (os error 111)"));
        assert!(is_connection_error("operation timed out"));
        assert!(is_connection_error("error running server function"));
    }

    #[test]
    fn logic_failures_are_not_connection_errors() {
        assert!(!is_connection_error("address must start with 0x"));
        assert!(!is_connection_error(
            "ALCHEMY_API_KEY environment variable is not set"
        ));
    }
}

//! # Yandex.Money API SDK
//!
//! Typed models, builders and request descriptors for the Yandex.Money wallet API.
//!
//! ## Features
//!
//! - **Validated models**: value objects and results can only exist in a valid state
//! - **Fluent builders**: cross-field rules (a successful payment always has an id) are
//!   checked once, in `create()`
//! - **Request descriptors**: method, URL and form parameters for each API call, with
//!   sandbox test-mode helpers
//! - **JSON adapters**: wire JSON is parsed through the same validation as hand-built models
//! - **Transport agnostic**: bring your own HTTP client through the [`net::Session`] seam
//!
//! ## Quick Start
//!
//! ```rust
//! use yandex_money_api::{
//!     methods::{process_payment, TestResult},
//!     net::{to_http_request, ApiRequest, DefaultHostsProvider},
//!     types::{MoneySource, Status},
//! };
//!
//! # fn main() -> yandex_money_api::Result<()> {
//! let hosts = DefaultHostsProvider::sandbox();
//!
//! // Describe the call
//! let request = process_payment::Request::create(
//!     "1234567",
//!     Some(&MoneySource::wallet()),
//!     None,
//!     None,
//!     None,
//! )?
//! .with_test_result(TestResult::Success);
//!
//! // Hand it to any HTTP client
//! let http_request = to_http_request(&request, &hosts, Some("access-token"))?;
//! assert_eq!(http_request.uri(), "https://demomoney.yandex.ru/api/process-payment");
//!
//! // Parse the answer
//! let payment = request.parse_response(r#"{"status":"success","payment_id":"2ABCDE123456789"}"#)?;
//! assert_eq!(payment.status(), Status::Success);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Value objects (avatar, money source, digital goods) and wire codes
//! - **`methods`**: API result models, their builders, and request descriptors
//! - **`adapters`**: JSON type adapters
//! - **`net`**: Host resolution, request descriptors and the session seam
//! - **`error`**: Error type shared by the whole crate

pub mod adapters;
pub mod error;
pub mod methods;
pub mod net;
pub mod types;

// Re-exports for convenience
pub use error::{ApiError, Result};
pub use methods::{process_payment, ProcessPayment, TestResult};
pub use net::{ApiRequest, DefaultHostsProvider, HostsProvider, Session};
pub use types::*;

/// Current version of the SDK
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports() {
        let avatar = Avatar::new(
            "https://avatars.example.com/42.png",
            DateTime::parse_from_rfc3339("2015-03-14T09:26:53+03:00").unwrap(),
        )
        .unwrap();
        assert_eq!(avatar.url(), "https://avatars.example.com/42.png");

        let request = process_payment::Request::new("1234567").unwrap();
        assert_eq!(request.request_id(), "1234567");
        assert_eq!(
            request.request_url(&DefaultHostsProvider::default()),
            "https://money.yandex.ru/api/process-payment"
        );
    }

    #[test]
    fn test_in_progress_payment_is_retried_with_same_request_id() {
        let request = process_payment::Request::new("1234567").unwrap();
        let payment = request
            .parse_response(r#"{"status":"in_progress","next_retry":3000}"#)
            .unwrap();
        assert!(payment.status().needs_retry());

        let retry = process_payment::Request::new(request.request_id()).unwrap();
        assert_eq!(retry.parameters(), request.parameters());
    }
}

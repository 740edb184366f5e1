//! API methods: result models, their builders, and request descriptors
//!
//! # Architecture
//!
//! - [`base_process_payment`] - Outcome fields shared by payment processing results
//! - [`process_payment`] - The process-payment call ([`ProcessPayment`], its
//!   builder, [`TestResult`] and [`process_payment::Request`])
//!
//! # Examples
//!
//! ## Building a result
//!
//! ```
//! use rust_decimal::Decimal;
//! use yandex_money_api::methods::ProcessPayment;
//! use yandex_money_api::types::Status;
//!
//! # fn example() -> yandex_money_api::Result<()> {
//! let payment = ProcessPayment::builder()
//!     .with_status(Status::Success)
//!     .with_payment_id("2ABCDE123456789")
//!     .with_balance(Decimal::new(100050, 2))
//!     .create()?;
//!
//! assert_eq!(payment.payment_id(), Some("2ABCDE123456789"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Requesting a simulated outcome
//!
//! ```
//! use yandex_money_api::methods::{process_payment, TestResult};
//! use yandex_money_api::net::ApiRequest;
//! use yandex_money_api::types::MoneySource;
//!
//! # fn example() -> yandex_money_api::Result<()> {
//! let request = process_payment::Request::create(
//!     "1234567",
//!     Some(&MoneySource::wallet()),
//!     None,
//!     None,
//!     None,
//! )?
//! .with_test_result(TestResult::NotEnoughFunds);
//!
//! assert_eq!(request.parameters().get("test_payment"), Some("true"));
//! # Ok(())
//! # }
//! ```

pub mod base_process_payment;
pub mod process_payment;


pub use base_process_payment::{BaseProcessPayment, BaseProcessPaymentBuilder};
pub use process_payment::{ProcessPayment, ProcessPaymentBuilder, TestResult};

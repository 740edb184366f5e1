//! Value objects and wire-code enumerations
//!
//! This module holds the immutable building blocks composed by the API result
//! models in [`methods`](crate::methods).
//!
//! # Architecture
//!
//! - [`avatar`] - Account avatar (URL + change time)
//! - [`money_source`] - Payer's funding instrument
//! - [`digital_goods`] - Vouchers and codes returned by a completed payment
//! - [`status`] - Payment status and error codes
//!
//! # Examples
//!
//! ```
//! use chrono::DateTime;
//! use yandex_money_api::types::{Avatar, Status};
//!
//! # fn example() -> yandex_money_api::Result<()> {
//! let avatar = Avatar::new(
//!     "https://avatars.example.com/42.png",
//!     DateTime::parse_from_rfc3339("2015-03-14T09:26:53+03:00").unwrap(),
//! )?;
//! assert_eq!(avatar.url(), "https://avatars.example.com/42.png");
//!
//! let status: Status = "in_progress".parse()?;
//! assert!(status.needs_retry());
//! # Ok(())
//! # }
//! ```

mod codes;

pub mod avatar;
pub mod digital_goods;
pub mod money_source;
pub mod status;

// Re-export commonly used types
pub use avatar::Avatar;
pub use digital_goods::{DigitalGoods, Good};
pub use money_source::MoneySource;
pub use status::{PaymentError, Status};

pub(crate) use codes::wire_codes;

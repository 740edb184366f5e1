//! Fields shared by payment processing results

use crate::error::{require, ApiError, Result};
use crate::types::{PaymentError, Status};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Outcome fields common to every payment processing call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseProcessPayment {
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<PaymentError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    acs_uri: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    acs_params: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_retry: Option<u64>,
}

impl BaseProcessPayment {
    /// Processing status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Refusal reason; always present when the status is [`Status::Refused`]
    pub fn error(&self) -> Option<PaymentError> {
        self.error
    }

    /// Transaction number of the invoice
    pub fn invoice_id(&self) -> Option<&str> {
        self.invoice_id.as_deref()
    }

    /// Address of the external authentication page; always present when the
    /// status is [`Status::ExtAuthRequired`]
    pub fn acs_uri(&self) -> Option<&str> {
        self.acs_uri.as_deref()
    }

    /// Parameters to post to [`acs_uri`](Self::acs_uri)
    pub fn acs_params(&self) -> &BTreeMap<String, String> {
        &self.acs_params
    }

    /// Suggested delay before repeating an in-progress request
    pub fn next_retry(&self) -> Option<Duration> {
        self.next_retry.map(Duration::from_millis)
    }
}

/// Accumulates the shared outcome fields
///
/// Concrete builders embed one and call [`build`](Self::build) from their own
/// `create()`.
#[derive(Debug, Clone, Default)]
pub struct BaseProcessPaymentBuilder {
    pub(crate) status: Option<Status>,
    pub(crate) error: Option<PaymentError>,
    pub(crate) invoice_id: Option<String>,
    pub(crate) acs_uri: Option<String>,
    pub(crate) acs_params: BTreeMap<String, String>,
    pub(crate) next_retry: Option<u64>,
}

impl BaseProcessPaymentBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the processing status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the refusal reason
    pub fn with_error(mut self, error: PaymentError) -> Self {
        self.error = Some(error);
        self
    }

    /// Set the invoice id
    pub fn with_invoice_id(mut self, invoice_id: impl Into<String>) -> Self {
        self.invoice_id = Some(invoice_id.into());
        self
    }

    /// Set the external authentication page
    pub fn with_acs_uri(mut self, acs_uri: impl Into<String>) -> Self {
        self.acs_uri = Some(acs_uri.into());
        self
    }

    /// Set the external authentication parameters
    pub fn with_acs_params(mut self, acs_params: BTreeMap<String, String>) -> Self {
        self.acs_params = acs_params;
        self
    }

    /// Set the retry hint in milliseconds
    pub fn with_next_retry(mut self, next_retry_ms: u64) -> Self {
        self.next_retry = Some(next_retry_ms);
        self
    }

    /// Validate the shared fields on behalf of `model`
    ///
    /// Fails when the status is missing, when a refusal carries no error code,
    /// or when external authentication is requested without a page to go to.
    pub fn build(self, model: &'static str) -> Result<BaseProcessPayment> {
        let status = require("status", self.status)?;

        match status {
            Status::Refused if self.error.is_none() => {
                return Err(ApiError::inconsistent(
                    model,
                    "error is missing when status is refused",
                ));
            }
            Status::ExtAuthRequired if self.acs_uri.as_deref().map_or(true, str::is_empty) => {
                return Err(ApiError::inconsistent(
                    model,
                    "acs_uri is missing when status is ext_auth_required",
                ));
            }
            _ => {}
        }

        Ok(BaseProcessPayment {
            status,
            error: self.error,
            invoice_id: self.invoice_id,
            acs_uri: self.acs_uri,
            acs_params: self.acs_params,
            next_retry: self.next_retry,
        })
    }
}

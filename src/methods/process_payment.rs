//! Process payment
//!
//! Second step of a payment: confirms a payment previously prepared by a
//! request-payment call, identified by its request id. Requires an authorized
//! session.

use super::base_process_payment::{BaseProcessPayment, BaseProcessPaymentBuilder};
use crate::adapters::JsonAdapter;
use crate::error::{ApiError, Result};
use crate::net::{ApiRequest, HostsProvider, Parameters, PostRequest};
use crate::types::{wire_codes, DigitalGoods, MoneySource, PaymentError, Status};
use http::Method;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Path of the call relative to the money API host
pub const PATH: &str = "/process-payment";

/// Request parameter names
pub mod params {
    pub const MONEY_SOURCE: &str = "money_source";
    pub const REQUEST_ID: &str = "request_id";
    pub const CSC: &str = "csc";
    pub const EXT_AUTH_SUCCESS_URI: &str = "ext_auth_success_uri";
    pub const EXT_AUTH_FAIL_URI: &str = "ext_auth_fail_uri";
    pub const TEST_PAYMENT: &str = "test_payment";
    pub const TEST_CARD: &str = "test_card";
    pub const TEST_RESULT: &str = "test_result";
}

const MODEL: &str = "ProcessPayment";

/// Result of a process payment call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProcessPaymentJson")]
pub struct ProcessPayment {
    #[serde(flatten)]
    base: BaseProcessPayment,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    credit_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_unblock_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payee_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hold_for_pickup_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digital_goods: Option<DigitalGoods>,
}

impl ProcessPayment {
    /// Start building a result
    pub fn builder() -> ProcessPaymentBuilder {
        ProcessPaymentBuilder::new()
    }

    /// Fields shared with other payment processing results
    pub fn base(&self) -> &BaseProcessPayment {
        &self.base
    }

    /// Processing status
    pub fn status(&self) -> Status {
        self.base.status()
    }

    /// Refusal reason
    pub fn error(&self) -> Option<PaymentError> {
        self.base.error()
    }

    /// Payment id; always present when the status is [`Status::Success`]
    pub fn payment_id(&self) -> Option<&str> {
        self.payment_id.as_deref()
    }

    /// Account balance after the payment
    pub fn balance(&self) -> Option<Decimal> {
        self.balance
    }

    /// Payer's account number
    pub fn payer(&self) -> Option<&str> {
        self.payer.as_deref()
    }

    /// Payee's account number
    pub fn payee(&self) -> Option<&str> {
        self.payee.as_deref()
    }

    /// Amount the payee receives
    pub fn credit_amount(&self) -> Option<Decimal> {
        self.credit_amount
    }

    /// Page where a blocked account can be unblocked
    pub fn account_unblock_uri(&self) -> Option<&str> {
        self.account_unblock_uri.as_deref()
    }

    /// Payee's user id
    pub fn payee_uid(&self) -> Option<&str> {
        self.payee_uid.as_deref()
    }

    /// Link for receiving a transfer held for pickup
    pub fn hold_for_pickup_link(&self) -> Option<&str> {
        self.hold_for_pickup_link.as_deref()
    }

    /// Digital goods received with the payment
    pub fn digital_goods(&self) -> Option<&DigitalGoods> {
        self.digital_goods.as_ref()
    }

    /// Suggested delay before repeating an in-progress request
    pub fn next_retry(&self) -> Option<Duration> {
        self.base.next_retry()
    }
}

/// Builder for [`ProcessPayment`]
///
/// [`create`](Self::create) consumes the builder; clone it first to produce
/// several results from the same fields.
#[derive(Debug, Clone, Default)]
pub struct ProcessPaymentBuilder {
    base: BaseProcessPaymentBuilder,
    payment_id: Option<String>,
    balance: Option<Decimal>,
    payer: Option<String>,
    payee: Option<String>,
    credit_amount: Option<Decimal>,
    account_unblock_uri: Option<String>,
    payee_uid: Option<String>,
    hold_for_pickup_link: Option<String>,
    digital_goods: Option<DigitalGoods>,
}

impl ProcessPaymentBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the processing status
    pub fn with_status(mut self, status: Status) -> Self {
        self.base = self.base.with_status(status);
        self
    }

    /// Set the refusal reason
    pub fn with_error(mut self, error: PaymentError) -> Self {
        self.base = self.base.with_error(error);
        self
    }

    /// Set the invoice id
    pub fn with_invoice_id(mut self, invoice_id: impl Into<String>) -> Self {
        self.base = self.base.with_invoice_id(invoice_id);
        self
    }

    /// Set the external authentication page
    pub fn with_acs_uri(mut self, acs_uri: impl Into<String>) -> Self {
        self.base = self.base.with_acs_uri(acs_uri);
        self
    }

    /// Set the external authentication parameters
    pub fn with_acs_params(mut self, acs_params: BTreeMap<String, String>) -> Self {
        self.base = self.base.with_acs_params(acs_params);
        self
    }

    /// Set the retry hint in milliseconds
    pub fn with_next_retry(mut self, next_retry_ms: u64) -> Self {
        self.base = self.base.with_next_retry(next_retry_ms);
        self
    }

    /// Set the payment id
    pub fn with_payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment_id = Some(payment_id.into());
        self
    }

    /// Set the account balance
    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Set the payer's account number
    pub fn with_payer(mut self, payer: impl Into<String>) -> Self {
        self.payer = Some(payer.into());
        self
    }

    /// Set the payee's account number
    pub fn with_payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = Some(payee.into());
        self
    }

    /// Set the amount the payee receives
    pub fn with_credit_amount(mut self, credit_amount: Decimal) -> Self {
        self.credit_amount = Some(credit_amount);
        self
    }

    /// Set the account unblock page
    pub fn with_account_unblock_uri(mut self, account_unblock_uri: impl Into<String>) -> Self {
        self.account_unblock_uri = Some(account_unblock_uri.into());
        self
    }

    /// Set the payee's user id
    pub fn with_payee_uid(mut self, payee_uid: impl Into<String>) -> Self {
        self.payee_uid = Some(payee_uid.into());
        self
    }

    /// Set the hold-for-pickup link
    pub fn with_hold_for_pickup_link(mut self, hold_for_pickup_link: impl Into<String>) -> Self {
        self.hold_for_pickup_link = Some(hold_for_pickup_link.into());
        self
    }

    /// Set the received digital goods
    pub fn with_digital_goods(mut self, digital_goods: DigitalGoods) -> Self {
        self.digital_goods = Some(digital_goods);
        self
    }

    /// Validate the fields and freeze them into a [`ProcessPayment`]
    pub fn create(self) -> Result<ProcessPayment> {
        let base = self.base.build(MODEL)?;

        let has_payment_id = self.payment_id.as_deref().is_some_and(|id| !id.is_empty());
        if base.status() == Status::Success && !has_payment_id {
            return Err(ApiError::inconsistent(
                MODEL,
                "payment_id is missing when status is success",
            ));
        }

        Ok(ProcessPayment {
            base,
            payment_id: self.payment_id,
            balance: self.balance,
            payer: self.payer,
            payee: self.payee,
            credit_amount: self.credit_amount,
            account_unblock_uri: self.account_unblock_uri,
            payee_uid: self.payee_uid,
            hold_for_pickup_link: self.hold_for_pickup_link,
            digital_goods: self.digital_goods,
        })
    }
}

/// Wire shape of [`ProcessPayment`]; validated through the builder
#[derive(Deserialize)]
struct ProcessPaymentJson {
    status: Option<Status>,
    error: Option<PaymentError>,
    invoice_id: Option<String>,
    acs_uri: Option<String>,
    #[serde(default)]
    acs_params: BTreeMap<String, String>,
    next_retry: Option<u64>,
    payment_id: Option<String>,
    balance: Option<Decimal>,
    payer: Option<String>,
    payee: Option<String>,
    credit_amount: Option<Decimal>,
    account_unblock_uri: Option<String>,
    payee_uid: Option<String>,
    hold_for_pickup_link: Option<String>,
    digital_goods: Option<DigitalGoods>,
}

impl TryFrom<ProcessPaymentJson> for ProcessPayment {
    type Error = ApiError;

    fn try_from(json: ProcessPaymentJson) -> Result<Self> {
        ProcessPaymentBuilder {
            base: BaseProcessPaymentBuilder {
                status: json.status,
                error: json.error,
                invoice_id: json.invoice_id,
                acs_uri: json.acs_uri,
                acs_params: json.acs_params,
                next_retry: json.next_retry,
            },
            payment_id: json.payment_id,
            balance: json.balance,
            payer: json.payer,
            payee: json.payee,
            credit_amount: json.credit_amount,
            account_unblock_uri: json.account_unblock_uri,
            payee_uid: json.payee_uid,
            hold_for_pickup_link: json.hold_for_pickup_link,
            digital_goods: json.digital_goods,
        }
        .create()
    }
}

wire_codes! {
    /// Outcome requested from the sandbox in test mode
    pub enum TestResult("test result") {
        Success => "success",
        ContractNotFound => "contract_not_found",
        NotEnoughFunds => "not_enough_funds",
        LimitExceeded => "limit_exceeded",
        MoneySourceNotAvailable => "money_source_not_available",
        IllegalParamCsc => "illegal_param_csc",
        PaymentRefused => "payment_refused",
        AuthorizationReject => "authorization_reject",
        AccountBlocked => "account_blocked",
        IllegalParamExtAuthSuccessUri => "illegal_param_ext_auth_success_uri",
        IllegalParamExtAuthFailUri => "illegal_param_ext_auth_fail_uri",
    }
}

impl<'de> Deserialize<'de> for TestResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// Request for payment processing
///
/// Authorized session required.
#[derive(Debug, Clone)]
pub struct Request {
    inner: PostRequest<ProcessPayment>,
}

impl Request {
    /// Repeat a request using the same request id
    ///
    /// Used while a previous attempt is [`Status::InProgress`].
    pub fn new(request_id: &str) -> Result<Self> {
        Self::create(request_id, None, None, None, None)
    }

    /// First request for payment processing
    ///
    /// * `money_source` - selected money source
    /// * `csc` - card security code, if the money source requires it
    /// * `ext_auth_success_uri` - redirect target after successful external authentication
    /// * `ext_auth_fail_uri` - redirect target after failed external authentication
    pub fn create(
        request_id: &str,
        money_source: Option<&MoneySource>,
        csc: Option<&str>,
        ext_auth_success_uri: Option<&str>,
        ext_auth_fail_uri: Option<&str>,
    ) -> Result<Self> {
        if request_id.is_empty() {
            return Err(ApiError::invalid_argument("request_id is null or empty"));
        }

        let mut inner = PostRequest::new(JsonAdapter::new());
        inner.add_optional_parameter(params::MONEY_SOURCE, money_source.map(MoneySource::id));
        inner.add_parameter(params::REQUEST_ID, request_id);
        inner.add_optional_parameter(params::CSC, csc);
        inner.add_optional_parameter(params::EXT_AUTH_SUCCESS_URI, ext_auth_success_uri);
        inner.add_optional_parameter(params::EXT_AUTH_FAIL_URI, ext_auth_fail_uri);

        tracing::debug!(
            "Created process-payment request {} with {} parameters",
            request_id,
            inner.parameters().len()
        );

        Ok(Self { inner })
    }

    /// Request id this request confirms
    pub fn request_id(&self) -> &str {
        self.inner
            .parameters()
            .get(params::REQUEST_ID)
            .unwrap_or_default()
    }

    /// Make the test card available; also turns on test mode
    pub fn test_card_available(mut self) -> Self {
        self.inner.add_parameter(params::TEST_PAYMENT, true);
        self.inner.add_parameter(params::TEST_CARD, true);
        self
    }

    /// Ask the sandbox for a specific outcome; also turns on test mode
    pub fn with_test_result(mut self, test_result: TestResult) -> Self {
        self.inner.add_parameter(params::TEST_PAYMENT, true);
        self.inner.add_parameter(params::TEST_RESULT, test_result.code());
        self
    }
}

impl ApiRequest for Request {
    type Response = ProcessPayment;

    fn method(&self) -> Method {
        Method::POST
    }

    fn request_url(&self, hosts: &dyn HostsProvider) -> String {
        format!("{}{}", hosts.money_api(), PATH)
    }

    fn parameters(&self) -> &Parameters {
        self.inner.parameters()
    }

    fn parse_response(&self, body: &str) -> Result<ProcessPayment> {
        self.inner.parse_response(body)
    }
}

//! Payment processing status and error codes

use super::codes::{parse_or, wire_codes};
use serde::{Deserialize, Deserializer};

wire_codes! {
    /// Outcome of a payment processing call
    pub enum Status("status") {
        /// Payment completed
        Success => "success",
        /// Payment was refused; the reason is in the `error` field
        Refused => "refused",
        /// Authorization is still running; repeat the request with the same request id
        InProgress => "in_progress",
        /// External authentication (3-D Secure) must be passed first
        ExtAuthRequired => "ext_auth_required",
        /// Code not known to this SDK
        Unknown => "unknown",
    }
}

impl Status {
    /// Whether no further requests will change the outcome
    pub fn is_final(&self) -> bool {
        matches!(self, Status::Success | Status::Refused)
    }

    /// Whether the same request should be sent again later
    pub fn needs_retry(&self) -> bool {
        matches!(self, Status::InProgress)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(parse_or(&code, Status::Unknown))
    }
}

wire_codes! {
    /// Error code reported alongside a refused payment
    pub enum PaymentError("payment error") {
        /// Mandatory parameters are missing or malformed
        IllegalParams => "illegal_params",
        /// Requested money source is invalid
        IllegalParamMoneySource => "illegal_param_money_source",
        /// No pending payment matches the request id
        ContractNotFound => "contract_not_found",
        /// Not enough funds in the selected money source
        NotEnoughFunds => "not_enough_funds",
        /// Operation exceeds one of the account limits
        LimitExceeded => "limit_exceeded",
        /// Selected money source cannot be used for this payment
        MoneySourceNotAvailable => "money_source_not_available",
        /// Card security code is missing or wrong
        IllegalParamCsc => "illegal_param_csc",
        /// Payment was refused by the merchant or the bank
        PaymentRefused => "payment_refused",
        /// Card issuer rejected the authorization
        AuthorizationReject => "authorization_reject",
        /// Account is blocked; see `account_unblock_uri`
        AccountBlocked => "account_blocked",
        /// `ext_auth_success_uri` is missing or malformed
        IllegalParamExtAuthSuccessUri => "illegal_param_ext_auth_success_uri",
        /// `ext_auth_fail_uri` is missing or malformed
        IllegalParamExtAuthFailUri => "illegal_param_ext_auth_fail_uri",
        /// Server-side failure; retry later
        TechnicalError => "technical_error",
        /// Code not known to this SDK
        Unknown => "unknown",
    }
}

impl<'de> Deserialize<'de> for PaymentError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(parse_or(&code, PaymentError::Unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Success.code(), "success");
        assert_eq!(Status::InProgress.code(), "in_progress");
        assert_eq!(Status::ExtAuthRequired.to_string(), "ext_auth_required");
        assert_eq!("refused".parse::<Status>().unwrap(), Status::Refused);
        assert!(matches!(
            "done".parse::<Status>(),
            Err(ApiError::UnknownCode { kind: "status", .. })
        ));
    }

    #[test]
    fn test_status_lifecycle() {
        assert!(Status::Success.is_final());
        assert!(Status::Refused.is_final());
        assert!(!Status::InProgress.is_final());
        assert!(Status::InProgress.needs_retry());
        assert!(!Status::ExtAuthRequired.needs_retry());
        assert!(!Status::Unknown.is_final());
    }

    #[test]
    fn test_status_json_is_lenient() {
        let status: Status = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, Status::InProgress);

        let status: Status = serde_json::from_str("\"hold_for_pickup\"").unwrap();
        assert_eq!(status, Status::Unknown);

        assert_eq!(
            serde_json::to_string(&Status::ExtAuthRequired).unwrap(),
            "\"ext_auth_required\""
        );
    }

    #[test]
    fn test_payment_error_codes() {
        for error in PaymentError::ALL {
            assert_eq!(error.code().parse::<PaymentError>().unwrap(), *error);
        }

        let error: PaymentError = serde_json::from_str("\"not_enough_funds\"").unwrap();
        assert_eq!(error, PaymentError::NotEnoughFunds);

        let error: PaymentError = serde_json::from_str("\"brand_new_error\"").unwrap();
        assert_eq!(error, PaymentError::Unknown);
    }
}

//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use rosterline_domain::RosterError;
use rust_xlsxwriter::XlsxError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RosterError);

impl From<InfraError> for RosterError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RosterError> for InfraError {
    fn from(value: RosterError) -> Self {
        InfraError(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else if err.is_decode() {
            // Shape failures on a response are treated as transport failures.
            format!("response body could not be decoded: {err}")
        } else {
            err.to_string()
        };
        InfraError(RosterError::Network(message))
    }
}

impl From<XlsxError> for InfraError {
    fn from(err: XlsxError) -> Self {
        InfraError(RosterError::Internal(format!("spreadsheet write failed: {err}")))
    }
}

use std::error::Error;

use bigdecimal::ParseBigDecimalError;
use rusoto_ce::GetCostAndUsageError;
use rusoto_core::RusotoError;
use rusoto_sts::GetCallerIdentityError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CostLookupError {
    GetCostAndUsage(RusotoError<GetCostAndUsageError>),
    NoResults,
    NoneValue,
    InvalidAmount(ParseBigDecimalError),
    ToPrimitive,
}

impl Display for CostLookupError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            CostLookupError::GetCostAndUsage(ref error) => {
                write!(f, "Error fetching cost data: {}", error)
            }
            CostLookupError::NoResults => write!(f, "Cost Explorer returned no results"),
            CostLookupError::NoneValue => write!(f, "UnblendedCost amount is missing"),
            CostLookupError::InvalidAmount(ref error) => {
                write!(f, "Failed to parse cost amount: {}", error)
            }
            CostLookupError::ToPrimitive => {
                write!(f, "Cost amount does not fit in a float")
            }
        }
    }
}

impl Error for CostLookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            CostLookupError::GetCostAndUsage(ref error) => Some(error),
            CostLookupError::InvalidAmount(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<RusotoError<GetCostAndUsageError>> for CostLookupError {
    fn from(e: RusotoError<GetCostAndUsageError>) -> CostLookupError {
        CostLookupError::GetCostAndUsage(e)
    }
}

impl From<ParseBigDecimalError> for CostLookupError {
    fn from(e: ParseBigDecimalError) -> CostLookupError {
        CostLookupError::InvalidAmount(e)
    }
}

#[derive(Debug)]
pub enum IdentityLookupError {
    GetCallerIdentity(RusotoError<GetCallerIdentityError>),
    NoneValue,
}

impl Display for IdentityLookupError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            IdentityLookupError::GetCallerIdentity(ref error) => {
                write!(f, "Error fetching account ID: {}", error)
            }
            IdentityLookupError::NoneValue => write!(f, "Account is missing from caller identity"),
        }
    }
}

impl Error for IdentityLookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            IdentityLookupError::GetCallerIdentity(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<RusotoError<GetCallerIdentityError>> for IdentityLookupError {
    fn from(e: RusotoError<GetCallerIdentityError>) -> IdentityLookupError {
        IdentityLookupError::GetCallerIdentity(e)
    }
}

#[derive(Debug)]
pub enum AlertDispatchError {
    Request(reqwest::Error),
    Rejected { status: u16, body: String },
}

impl Display for AlertDispatchError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            AlertDispatchError::Request(ref error) => {
                write!(f, "Error sending alert to Notifox: {}", error)
            }
            AlertDispatchError::Rejected { status, ref body } => {
                write!(f, "Failed to send alert ({}): {}", status, body)
            }
        }
    }
}

impl Error for AlertDispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            AlertDispatchError::Request(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AlertDispatchError {
    fn from(e: reqwest::Error) -> AlertDispatchError {
        AlertDispatchError::Request(e)
    }
}

#[derive(Debug)]
pub enum CostNotifierError {
    CostLookup(CostLookupError),
    IdentityLookup(IdentityLookupError),
    AlertDispatch(AlertDispatchError),
}

impl CostNotifierError {
    pub fn category(&self) -> &'static str {
        match *self {
            CostNotifierError::CostLookup(_) => "CostLookupError",
            CostNotifierError::IdentityLookup(_) => "IdentityLookupError",
            CostNotifierError::AlertDispatch(_) => "AlertDispatchError",
        }
    }
}

impl Display for CostNotifierError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            CostNotifierError::CostLookup(ref error) => Display::fmt(error, f),
            CostNotifierError::IdentityLookup(ref error) => Display::fmt(error, f),
            CostNotifierError::AlertDispatch(ref error) => Display::fmt(error, f),
        }
    }
}

impl Error for CostNotifierError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            CostNotifierError::CostLookup(ref error) => Some(error),
            CostNotifierError::IdentityLookup(ref error) => Some(error),
            CostNotifierError::AlertDispatch(ref error) => Some(error),
        }
    }
}

impl From<CostLookupError> for CostNotifierError {
    fn from(e: CostLookupError) -> CostNotifierError {
        CostNotifierError::CostLookup(e)
    }
}

impl From<IdentityLookupError> for CostNotifierError {
    fn from(e: IdentityLookupError) -> CostNotifierError {
        CostNotifierError::IdentityLookup(e)
    }
}

impl From<AlertDispatchError> for CostNotifierError {
    fn from(e: AlertDispatchError) -> CostNotifierError {
        CostNotifierError::AlertDispatch(e)
    }
}

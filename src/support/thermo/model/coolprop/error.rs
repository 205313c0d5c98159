use std::sync::PoisonError;

use thiserror::Error;

use crate::support::thermo::PropertyError;

/// Errors raised inside the [`CoolProp`](super::CoolProp) backend before they
/// are classified as a [`PropertyError`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoolPropError {
    #[error(transparent)]
    Rfluids(#[from] rfluids::native::CoolPropError),
    #[error("CoolProp abstract state mutex poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CoolPropError {
    fn from(_: PoisonError<T>) -> Self {
        CoolPropError::Poisoned
    }
}

impl From<CoolPropError> for PropertyError {
    fn from(error: CoolPropError) -> Self {
        match error {
            CoolPropError::Rfluids(error) => classify(&error.to_string()),
            CoolPropError::Poisoned => PropertyError::Calculation {
                context: error.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Undefined,
    OutOfDomain,
    InvalidState,
}

/// Message fragments CoolProp uses, checked in order.
///
/// `rfluids` only exposes the message text, so classification is by
/// substring. Anything unmatched is a [`PropertyError::Calculation`].
const MARKERS: &[(&str, Kind)] = &[
    ("not defined", Kind::Undefined),
    ("two-phase", Kind::Undefined),
    ("out of range", Kind::OutOfDomain),
    ("not in range", Kind::OutOfDomain),
    ("outside the range of validity", Kind::OutOfDomain),
    ("must be in range", Kind::OutOfDomain),
    ("must be between", Kind::OutOfDomain),
    ("quality must be", Kind::OutOfDomain),
    ("above the critical", Kind::OutOfDomain),
    ("below the triple", Kind::OutOfDomain),
    ("not a valid number", Kind::InvalidState),
    ("invalid number", Kind::InvalidState),
    ("invalid state", Kind::InvalidState),
];

fn classify(message: &str) -> PropertyError {
    let lowered = message.to_lowercase();
    let context = message.to_string();

    match MARKERS
        .iter()
        .find(|(marker, _)| lowered.contains(marker))
        .map(|&(_, kind)| kind)
    {
        Some(Kind::Undefined) => PropertyError::Undefined { context },
        Some(Kind::OutOfDomain) => PropertyError::OutOfDomain { context },
        Some(Kind::InvalidState) => PropertyError::InvalidState { context },
        None => PropertyError::Calculation { context },
    }
}

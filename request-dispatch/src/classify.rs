use crate::types::{AuthExpiry, ResponseEnvelope};
use std::ops::Range;

/// Statuses treated as "server reachable and responded normally"
pub const ACCEPTANCE_BAND: Range<u16> = 200..400;

/// How a received response is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Accepted,
    ServerFault,
    AuthError(AuthExpiry),
    BusinessError,
}

pub fn in_acceptance_band(status_code: u16) -> bool {
    ACCEPTANCE_BAND.contains(&status_code)
}

/// Classify a response. Checks run in priority order: acceptance, server
/// fault, auth sentinel, then everything else is a business error.
pub fn classify(envelope: &ResponseEnvelope) -> Classification {
    let in_band = in_acceptance_band(envelope.status_code);

    if in_band && envelope.body.code_is_falsy() {
        return Classification::Accepted;
    }

    if !in_band {
        return Classification::ServerFault;
    }

    match envelope.body.msg.as_deref().and_then(AuthExpiry::from_message) {
        Some(reason) => Classification::AuthError(reason),
        None => Classification::BusinessError,
    }
}

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::TypeValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    pub fn label(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }

    /// Infants sit on an adult's lap and never take a seat.
    pub fn needs_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TicketType {
    type Err = TypeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| TypeValidationError::InvalidTicketType(s.to_string()))
    }
}

/// One line item of a purchase: `quantity` tickets of a single type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketRequest {
    ticket_type: TicketType,
    quantity: u32,
}

impl TicketRequest {
    pub fn new(ticket_type: TicketType, quantity: u32) -> Result<Self, TypeValidationError> {
        if quantity == 0 {
            return Err(TypeValidationError::InvalidQuantity(quantity.to_string()));
        }
        Ok(Self {
            ticket_type,
            quantity,
        })
    }

    /// Builds a request without the positive quantity check.
    #[cfg(test)]
    pub(crate) fn new_unchecked(ticket_type: TicketType, quantity: u32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Untyped request as it arrives from a caller, e.g. a JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTicketRequest {
    #[serde(rename = "type")]
    pub ticket_type: String,
    #[serde(rename = "noOfTickets")]
    pub quantity: serde_json::Number,
}

impl RawTicketRequest {
    pub fn new(ticket_type: impl Into<String>, quantity: impl Into<serde_json::Number>) -> Self {
        Self {
            ticket_type: ticket_type.into(),
            quantity: quantity.into(),
        }
    }

    /// Accepts fractional quantities so they can be rejected at conversion.
    pub fn from_f64(ticket_type: impl Into<String>, quantity: f64) -> Option<Self> {
        serde_json::Number::from_f64(quantity).map(|quantity| Self {
            ticket_type: ticket_type.into(),
            quantity,
        })
    }
}

impl TryFrom<&RawTicketRequest> for TicketRequest {
    type Error = TypeValidationError;

    fn try_from(raw: &RawTicketRequest) -> Result<Self, Self::Error> {
        let ticket_type = raw.ticket_type.parse()?;
        let quantity = whole_quantity(&raw.quantity)
            .ok_or_else(|| TypeValidationError::InvalidQuantity(raw.quantity.to_string()))?;
        TicketRequest::new(ticket_type, quantity)
    }
}

// 2 and 2.0 are both whole numbers, 2.5 and -2 are not quantities.
// Counts beyond u32 saturate so the batch cap rejects them.
fn whole_quantity(n: &serde_json::Number) -> Option<u32> {
    if let Some(q) = n.as_u64() {
        return Some(u32::try_from(q).unwrap_or(u32::MAX));
    }
    n.as_f64()
        .filter(|q| q.is_finite() && q.fract() == 0.0 && *q >= 0.0)
        .map(|q| q.min(f64::from(u32::MAX)) as u32)
}

impl TryFrom<RawTicketRequest> for TicketRequest {
    type Error = TypeValidationError;

    fn try_from(raw: RawTicketRequest) -> Result<Self, Self::Error> {
        TicketRequest::try_from(&raw)
    }
}

//! PII category taxonomy.

use serde::{Deserialize, Serialize};

/// A category of personally identifiable information.
///
/// The taxonomy is open: registering a rule under [`PiiCategory::Other`]
/// introduces a new category without touching the scanner, resolver,
/// redactor, or scorer. Wire names follow the external contract
/// (`email`, `phone`, `ssn`, `credit_card`, `ip_address`, `name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PiiCategory {
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// US Social Security number.
    Ssn,
    /// Payment card number.
    CreditCard,
    /// IPv4 or IPv6 address.
    IpAddress,
    /// Personal name.
    Name,
    /// An extension category identified by its wire name.
    Other(String),
}

impl PiiCategory {
    /// Returns the wire name for this category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Ssn => "ssn",
            Self::CreditCard => "credit_card",
            Self::IpAddress => "ip_address",
            Self::Name => "name",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Returns the redaction placeholder, e.g. `[EMAIL]` or `[CREDIT_CARD]`.
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("[{}]", self.as_str().to_ascii_uppercase())
    }
}

impl std::fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PiiCategory> for String {
    fn from(category: PiiCategory) -> Self {
        category.as_str().to_string()
    }
}

impl From<String> for PiiCategory {
    fn from(name: String) -> Self {
        match name.as_str() {
            "email" => Self::Email,
            "phone" => Self::Phone,
            "ssn" => Self::Ssn,
            "credit_card" => Self::CreditCard,
            "ip_address" => Self::IpAddress,
            "name" => Self::Name,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for PiiCategory {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

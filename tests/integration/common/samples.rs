//! Sample texts used across the integration suite.

/// Texts containing exactly one email address each.
pub const EMAILS: &[&str] = &[
    "Contact: jane@example.com",
    "send the report to alice.smith+qa@corp.example.org today",
    "bob_jones@sub.domain.co is the on-call address",
];

/// Texts containing exactly one phone number each.
pub const PHONES: &[&str] = &[
    "call 555-123-4567 before noon",
    "office line is (415) 555-0123",
    "pager: +14155550123",
];

/// Texts containing exactly one valid SSN each.
pub const SSNS: &[&str] = &[
    "ssn on file: 123-45-6789",
    "their number is 545-12-3456",
];

/// Texts containing exactly one Luhn-valid card number each.
pub const CREDIT_CARDS: &[&str] = &[
    "card 4111111111111111 expires soon",
    "pay with 5500 0000 0000 0004",
    "amex on record: 340000000000009",
];

/// Texts containing exactly one IP address each.
pub const IP_ADDRESSES: &[&str] = &[
    "host 192.168.1.1 is unreachable",
    "server at 10.0.0.255 rebooted",
];

/// Texts that must produce no detections at all.
pub const CLEAN_TEXT: &[&str] = &[
    "the quick brown fox jumps over the lazy dog",
    "our meeting moved to next week",
    "Hello, how are you?",
    "totals look fine after the last fix",
];

/// One text carrying several categories at once: a name, an SSN, a card
/// number, an email, a phone number, and an IP address.
pub const MIXED_PII: &str = "Employee Jane Smith, SSN 123-45-6789, \
     card 4111 1111 1111 1111, email jane.smith@corp.example, \
     phone 555-123-4567, ip 10.0.0.12";

/// The canonical contact scenario and its expected redaction.
pub const CONTACT_TEXT: &str = "Contact me at jane@example.com or 555-123-4567";

/// Redacted form of [`CONTACT_TEXT`].
pub const CONTACT_REDACTED: &str = "Contact me at [EMAIL] or [PHONE]";

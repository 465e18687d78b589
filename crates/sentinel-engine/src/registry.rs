//! Pattern registry.
//!
//! Rules are pure value objects compiled once at startup into a
//! [`PatternRegistry`]. The registry is read-only for the lifetime of the
//! process, so any number of concurrent scans may share it without
//! synchronization. A rule that fails to compile aborts the build with
//! [`ScanError::MalformedRule`] rather than being skipped; the process must
//! not start with a broken registry.

use regex::Regex;
use sentinel_core::{PiiCategory, ScanError, SentinelResult};
use serde::{Deserialize, Serialize};

/// Structural validator applied to a raw match before it becomes a
/// candidate span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanValidator {
    /// Luhn checksum for payment card numbers.
    Luhn,
    /// US Social Security number area/group/serial rules.
    Ssn,
}

impl SpanValidator {
    /// Validates a matched value.
    #[must_use]
    pub fn validate(&self, value: &str) -> bool {
        match self {
            Self::Luhn => validate_luhn(value),
            Self::Ssn => validate_ssn(value),
        }
    }
}

/// A detection rule: one regular expression bound to exactly one category.
///
/// Multiple rules may target the same category; every rule contributes
/// candidates independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRule {
    /// Rule name, unique within the registry by convention.
    pub name: String,
    /// Category every match of this rule is tagged with.
    pub category: PiiCategory,
    /// Regular expression source.
    pub pattern: String,
    /// Base confidence assigned to matches, in `[0, 1]`.
    pub base_confidence: f64,
    /// Optional structural validator.
    pub validator: Option<SpanValidator>,
}

impl PatternRule {
    /// Creates a rule with a default base confidence of 0.8.
    pub fn new(
        name: impl Into<String>,
        category: PiiCategory,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            pattern: pattern.into(),
            base_confidence: 0.8,
            validator: None,
        }
    }

    /// Sets the base confidence.
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.base_confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Sets the validator.
    #[must_use]
    pub fn with_validator(mut self, validator: SpanValidator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// A rule whose pattern has been compiled.
#[derive(Debug)]
pub struct CompiledRule {
    /// The source rule.
    pub rule: PatternRule,
    regex: Regex,
}

impl CompiledRule {
    fn compile(rule: PatternRule) -> SentinelResult<Self> {
        let regex = Regex::new(&rule.pattern).map_err(|e| ScanError::MalformedRule {
            name: rule.name.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { rule, regex })
    }

    /// Returns the compiled regular expression.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// The process-wide set of compiled detection rules.
#[derive(Debug)]
pub struct PatternRegistry {
    rules: Vec<CompiledRule>,
}

impl PatternRegistry {
    /// Creates a registry builder.
    #[must_use]
    pub fn builder() -> PatternRegistryBuilder {
        PatternRegistryBuilder::default()
    }

    /// Builds the built-in rule table covering the default categories.
    pub fn builtin() -> SentinelResult<Self> {
        Self::builder()
            .rule(
                PatternRule::new(
                    "email",
                    PiiCategory::Email,
                    r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
                )
                .with_confidence(0.95),
            )
            .rule(
                PatternRule::new(
                    "phone_us",
                    PiiCategory::Phone,
                    r"(?:\+1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}",
                )
                .with_confidence(0.85),
            )
            .rule(
                PatternRule::new("phone_intl", PiiCategory::Phone, r"\+[1-9]\d{6,14}")
                    .with_confidence(0.80),
            )
            .rule(
                PatternRule::new("ssn", PiiCategory::Ssn, r"\b\d{3}[-\s]?\d{2}[-\s]?\d{4}\b")
                    .with_confidence(0.90)
                    .with_validator(SpanValidator::Ssn),
            )
            .rule(
                PatternRule::new(
                    "card_visa",
                    PiiCategory::CreditCard,
                    r"\b4[0-9]{12}(?:[0-9]{3})?\b",
                )
                .with_confidence(0.90)
                .with_validator(SpanValidator::Luhn),
            )
            .rule(
                PatternRule::new(
                    "card_mastercard",
                    PiiCategory::CreditCard,
                    r"\b(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}\b",
                )
                .with_confidence(0.90)
                .with_validator(SpanValidator::Luhn),
            )
            .rule(
                PatternRule::new("card_amex", PiiCategory::CreditCard, r"\b3[47][0-9]{13}\b")
                    .with_confidence(0.90)
                    .with_validator(SpanValidator::Luhn),
            )
            .rule(
                PatternRule::new(
                    "card_generic",
                    PiiCategory::CreditCard,
                    r"\b(?:\d{4}[-\s]?){3}\d{4}\b",
                )
                .with_confidence(0.75)
                .with_validator(SpanValidator::Luhn),
            )
            .rule(
                PatternRule::new(
                    "ipv4",
                    PiiCategory::IpAddress,
                    r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b",
                )
                .with_confidence(0.95),
            )
            .rule(
                PatternRule::new(
                    "ipv6",
                    PiiCategory::IpAddress,
                    r"\b(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b",
                )
                .with_confidence(0.95),
            )
            .rule(
                PatternRule::new(
                    "name_capitalized",
                    PiiCategory::Name,
                    r"\b[A-Z][a-z]+(?:\s[A-Z][a-z]+)+\b",
                )
                .with_confidence(0.55),
            )
            .build()
    }

    /// Returns every compiled rule.
    #[must_use]
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the registry holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Builder for [`PatternRegistry`].
#[derive(Debug, Default)]
pub struct PatternRegistryBuilder {
    rules: Vec<PatternRule>,
}

impl PatternRegistryBuilder {
    /// Adds a rule.
    #[must_use]
    pub fn rule(mut self, rule: PatternRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registers a rule from its parts. The rule name is derived from the
    /// category and the registration order.
    #[must_use]
    pub fn register(
        self,
        category: PiiCategory,
        pattern: impl Into<String>,
        base_confidence: f64,
    ) -> Self {
        let name = format!("{}_{}", category.as_str(), self.rules.len());
        self.rule(PatternRule::new(name, category, pattern).with_confidence(base_confidence))
    }

    /// Compiles every rule, failing fast on the first malformed pattern.
    pub fn build(self) -> SentinelResult<PatternRegistry> {
        let rules = self
            .rules
            .into_iter()
            .map(CompiledRule::compile)
            .collect::<SentinelResult<Vec<_>>>()?;
        Ok(PatternRegistry { rules })
    }
}

/// Validates a payment card number with the Luhn algorithm.
#[must_use]
pub fn validate_luhn(number: &str) -> bool {
    let digits: Vec<u32> = number
        .chars()
        .filter(|c| c.is_ascii_digit())
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() < 13 || digits.len() > 19 {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Validates a US SSN's area/group/serial structure.
#[must_use]
pub fn validate_ssn(ssn: &str) -> bool {
    let digits: String = ssn.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 9 {
        return false;
    }

    let area: u32 = digits[0..3].parse().unwrap_or(0);
    let group: u32 = digits[3..5].parse().unwrap_or(0);
    let serial: u32 = digits[5..9].parse().unwrap_or(0);

    if area == 0 || area == 666 || area >= 900 {
        return false;
    }
    if group == 0 || serial == 0 {
        return false;
    }

    true
}

// ============================================================================
// Encoder Configuration
// How non-positive and out-of-range input is rendered
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text rendered by [`InvalidInputPolicy::Marker`].
pub const INVALID_MARKER: &str = "INVALID";

// ============================================================================
// Invalid Input Policy
// ============================================================================

/// Rendering used for input that has no numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InvalidInputPolicy {
    /// Render nothing (the plain `encode` behavior)
    #[default]
    Empty,

    /// Render the literal `"INVALID"`
    Marker,
}

impl InvalidInputPolicy {
    /// The text this policy produces for rejected input.
    #[inline]
    pub const fn rendering(self) -> &'static str {
        match self {
            InvalidInputPolicy::Empty => "",
            InvalidInputPolicy::Marker => INVALID_MARKER,
        }
    }
}

// ============================================================================
// Complete Encoder Configuration
// ============================================================================

/// Configuration for a [`NumeralEncoder`](crate::numeral::NumeralEncoder)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncoderConfig {
    /// Rendering for non-positive (or capped) input
    pub invalid_input: InvalidInputPolicy,

    /// Optional: largest value the encoder will render
    /// None means unlimited
    pub max_value: Option<i64>,
}

impl EncoderConfig {
    /// Create a new configuration with the given invalid-input policy
    pub fn new(invalid_input: InvalidInputPolicy) -> Self {
        Self {
            invalid_input,
            max_value: None,
        }
    }

    /// Builder method: Set the invalid-input policy
    pub fn with_invalid_input(mut self, policy: InvalidInputPolicy) -> Self {
        self.invalid_input = policy;
        self
    }

    /// Builder method: Set the largest renderable value
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Whether `n` is renderable under this configuration.
    #[inline]
    pub fn accepts(&self, n: i64) -> bool {
        n > 0 && self.max_value.map_or(true, |max| n <= max)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(max) = self.max_value {
            if max <= 0 {
                return Err("Maximum value must be positive".to_string());
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EncoderConfig {
    /// Silent configuration: invalid input renders as `""`
    pub fn silent() -> Self {
        Self::new(InvalidInputPolicy::Empty)
    }

    /// Marked configuration: invalid input renders as `"INVALID"`
    pub fn marked() -> Self {
        Self::new(InvalidInputPolicy::Marker)
    }
}

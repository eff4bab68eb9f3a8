//! Promo code entry.
//!
//! Codes are checked by case-insensitive comparison with the configured code.
//! Applying a code is recorded for the session but does not change the order
//! summary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromoError {
    #[error("Invalid promo code")]
    Invalid,

    #[error("A promo code has already been applied")]
    AlreadyApplied,
}

/// Promo code state for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoCode {
    accepted: String,
    applied: bool,
}

impl PromoCode {
    /// Accept `code` (compared case-insensitively).
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            accepted: code.into(),
            applied: false,
        }
    }

    /// Try to apply a code entered by the shopper.
    ///
    /// # Errors
    ///
    /// Returns [`PromoError::AlreadyApplied`] if a code is already active, or
    /// [`PromoError::Invalid`] if `input` does not match.
    pub fn apply(&mut self, input: &str) -> Result<(), PromoError> {
        if self.applied {
            return Err(PromoError::AlreadyApplied);
        }
        if !input.trim().eq_ignore_ascii_case(&self.accepted) {
            return Err(PromoError::Invalid);
        }
        self.applied = true;
        Ok(())
    }

    #[must_use]
    pub const fn is_applied(&self) -> bool {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let mut promo = PromoCode::new("SAVE20");
        assert_eq!(promo.apply(" save20 "), Ok(()));
        assert!(promo.is_applied());
    }

    #[test]
    fn test_invalid_code() {
        let mut promo = PromoCode::new("SAVE20");
        assert_eq!(promo.apply("SAVE30"), Err(PromoError::Invalid));
        assert!(!promo.is_applied());
    }

    #[test]
    fn test_cannot_apply_twice() {
        let mut promo = PromoCode::new("SAVE20");
        promo.apply("SAVE20").ok();
        assert_eq!(promo.apply("SAVE20"), Err(PromoError::AlreadyApplied));
    }
}

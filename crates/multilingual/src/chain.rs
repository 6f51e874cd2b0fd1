//! Language preference order used when the requested language is missing.

use thiserror::Error;

use crate::Language;

/// Errors raised when constructing a [`FallbackChain`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackChainError {
    /// The chain must name at least one language.
    #[error("fallback chain must not be empty")]
    Empty,
    /// A language may only appear once.
    #[error("fallback chain lists {language} more than once")]
    Duplicate {
        /// The repeated language.
        language: Language,
    },
}

/// Ordered, duplicate-free list of languages tried after the requested one.
///
/// The default order is `es → en → fr → it → de`.
///
/// # Examples
/// ```
/// use multilingual::{FallbackChain, Language};
///
/// let chain = FallbackChain::new(vec![Language::En, Language::Es]).expect("valid chain");
/// assert_eq!(chain.languages(), &[Language::En, Language::Es]);
/// assert!(FallbackChain::new(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain(Vec<Language>);

impl FallbackChain {
    /// Validate and build a chain.
    ///
    /// # Errors
    ///
    /// Returns [`FallbackChainError`] when the list is empty or repeats a
    /// language.
    pub fn new(languages: Vec<Language>) -> Result<Self, FallbackChainError> {
        if languages.is_empty() {
            return Err(FallbackChainError::Empty);
        }
        for (position, language) in languages.iter().enumerate() {
            if languages.iter().take(position).any(|seen| seen == language) {
                return Err(FallbackChainError::Duplicate {
                    language: *language,
                });
            }
        }
        Ok(Self(languages))
    }

    /// Languages in preference order.
    #[must_use]
    pub fn languages(&self) -> &[Language] {
        self.0.as_slice()
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self(Language::ALL.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_chain_prefers_spanish_then_english() {
        assert_eq!(
            FallbackChain::default().languages(),
            &[
                Language::Es,
                Language::En,
                Language::Fr,
                Language::It,
                Language::De
            ]
        );
    }

    #[rstest]
    fn duplicates_are_rejected() {
        let err = FallbackChain::new(vec![Language::Fr, Language::En, Language::Fr])
            .expect_err("duplicate language");
        assert_eq!(
            err,
            FallbackChainError::Duplicate {
                language: Language::Fr
            }
        );
    }
}

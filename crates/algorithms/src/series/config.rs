use thiserror::Error;

/// Configuration for series accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_terms: usize,
}

/// Errors that can occur when validating an accumulation config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("max_terms must be at least one")]
    ZeroTerms,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(10_000).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated term limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_terms` is zero.
    pub fn new(max_terms: usize) -> Result<Self, ConfigError> {
        if max_terms == 0 {
            return Err(ConfigError::ZeroTerms);
        }

        Ok(Self { max_terms })
    }

    /// Returns the maximum number of terms to add.
    #[must_use]
    pub fn max_terms(&self) -> usize {
        self.max_terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_terms() {
        assert_eq!(Config::new(0), Err(ConfigError::ZeroTerms));
        assert_eq!(
            ConfigError::ZeroTerms.to_string(),
            "max_terms must be at least one"
        );
    }

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().max_terms(), 10_000);
        assert_eq!(Config::new(1).map(|c| c.max_terms()), Ok(1));
    }
}

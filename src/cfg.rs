#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::interp::Error;

/// Degenerate geometry policy: what to do when two reference
/// points share the same abscissa.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Policy {
    /// Construction always succeeds. Coincident abscissas yield
    /// non finite coefficients that propagate to every evaluation.
    #[default]
    Permissive,
    /// Coincident abscissas are rejected at construction time.
    Strict,
}

impl std::str::FromStr for Policy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Policy, Error> {
        let c = s.trim().to_lowercase();
        match c.as_str() {
            "permissive" => Ok(Policy::Permissive),
            "strict" => Ok(Policy::Strict),
            _ => Err(Error::UnknownPolicy(c.to_string())),
        }
    }
}

/// Interpolators configuration
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Degenerate geometry policy
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: Policy,
}

impl Config {
    /// Returns [Config] that rejects coincident abscissas
    pub fn strict() -> Self {
        Self::default().with_policy(Policy::Strict)
    }
    /// Copies and returns [Config] with desired [Policy]
    pub fn with_policy(&self, policy: Policy) -> Self {
        let mut s = self.clone();
        s.policy = policy;
        s
    }
}

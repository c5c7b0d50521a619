//! Engine configuration: vector dimension and generator seed.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VsaError};
use crate::vsa::dense::symbol_seed;
use crate::vsa::{TritRng, TritVec, DIM};

/// Parameters shared by every vector an application builds.
///
/// # Examples
///
/// ```
/// use hypertrit::{Trits, VsaConfig};
///
/// let config = VsaConfig::small().with_seed(7);
/// let a = config.random().unwrap();
/// let b = config.random().unwrap();
/// assert_eq!(a.dim(), 1024);
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VsaConfig {
    /// Number of trits per vector
    pub dim: usize,
    /// Generator seed; 0 draws a fresh seed from entropy on every use
    pub seed: u64,
}

impl Default for VsaConfig {
    fn default() -> Self {
        VsaConfig { dim: DIM, seed: 0 }
    }
}

impl VsaConfig {
    /// Create config sized for quick experiments
    pub fn small() -> Self {
        VsaConfig {
            dim: 1_024,
            ..Self::default()
        }
    }

    /// Create config sized for high-capacity superpositions
    pub fn large() -> Self {
        VsaConfig {
            dim: 65_536,
            ..Self::default()
        }
    }

    /// Same config with dimension `dim`.
    pub fn with_dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    /// Same config with generator seed `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse a JSON document; missing fields take their defaults.
    ///
    /// ```
    /// use hypertrit::VsaConfig;
    ///
    /// let config = VsaConfig::from_json(r#"{ "dim": 4096 }"#).unwrap();
    /// assert_eq!(config.dim, 4096);
    /// assert_eq!(config.seed, 0);
    /// assert!(VsaConfig::from_json(r#"{ "dim": 0 }"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: VsaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce usable vectors.
    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 {
            return Err(VsaError::Config("dim must be greater than zero".into()));
        }
        Ok(())
    }

    /// Generator seeded from this config.
    pub fn rng(&self) -> TritRng {
        TritRng::new(self.seed)
    }

    /// All-zero vector of the configured dimension.
    pub fn zeros(&self) -> Result<TritVec> {
        TritVec::zeros(self.dim)
    }

    /// Random vector of the configured dimension.
    pub fn random(&self) -> Result<TritVec> {
        TritVec::random(self.dim, self.seed)
    }

    /// Deterministic hypervector for a named symbol.
    ///
    /// The seed acts as a namespace: the same name under different seeds gives
    /// unrelated vectors, and seed 0 matches [`TritVec::from_symbol`].
    pub fn symbol(&self, name: &str) -> Result<TritVec> {
        TritVec::random(self.dim, symbol_seed(self.seed, name))
    }
}

//! Bias parameters for [`BiasedDrawEngine`](super::BiasedDrawEngine).
//!
//! Parameters are never rejected. Out-of-domain values are repaired when the
//! configuration is built or updated, and each repair is logged at debug
//! level.

/// Expected mean when none is given or the given one is out of domain.
pub const DEFAULT_EXPECTED: f64 = 0.5;

/// Smallest accepted expected mean.
pub const MIN_EXPECTED: f64 = 0.1;

/// Largest accepted expected mean.
pub const MAX_EXPECTED: f64 = 0.899_999_94;

/// Repairs an expected mean.
///
/// NaN and values outside `[0, 1)` become [`DEFAULT_EXPECTED`]; everything
/// else is clamped to `[MIN_EXPECTED, MAX_EXPECTED]`.
pub(crate) fn sanitise_expected(expected: f64) -> f64 {
    if !(0.0..1.0).contains(&expected) {
        tracing::debug!(
            expected,
            replacement = DEFAULT_EXPECTED,
            "expected mean outside [0, 1), using default"
        );
        return DEFAULT_EXPECTED;
    }
    expected.clamp(MIN_EXPECTED, MAX_EXPECTED)
}

/// Repairs a centrality; non-finite values become 0.
pub(crate) fn sanitise_centrality(centrality: f64) -> f64 {
    if centrality.is_finite() {
        centrality
    } else {
        tracing::debug!(centrality, "non-finite centrality, using 0");
        0.0
    }
}

/// Bias configuration: expected mean and centrality.
///
/// - `expected` is the mean of the biased doubles.
/// - `centrality` blends in a second variate: positive values concentrate
///   draws around the mean, negative values spread them out, and `0`
///   disables the blend. Its magnitude is a weight relative to 100.
///
/// # Examples
///
/// ```rust
/// use prng_core::draw::BiasConfig;
///
/// let config = BiasConfig::builder()
///     .expected(0.75)
///     .centrality(20.0)
///     .build();
///
/// assert_eq!(config.expected(), 0.75);
/// assert_eq!(config.centrality(), 20.0);
///
/// // Out-of-domain values are repaired, not rejected
/// assert_eq!(BiasConfig::new(1.5, 0.0).expected(), 0.5);
/// assert_eq!(BiasConfig::new(0.95, 0.0).expected(), 0.899_999_94);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawBiasConfig"))]
pub struct BiasConfig {
    expected: f64,
    centrality: f64,
}

impl BiasConfig {
    /// Creates a configuration, repairing out-of-domain values.
    pub fn new(expected: f64, centrality: f64) -> Self {
        Self {
            expected: sanitise_expected(expected),
            centrality: sanitise_centrality(centrality),
        }
    }

    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> BiasConfigBuilder {
        BiasConfigBuilder::default()
    }

    /// Returns the expected mean.
    #[inline]
    pub fn expected(&self) -> f64 {
        self.expected
    }

    /// Returns the centrality.
    #[inline]
    pub fn centrality(&self) -> f64 {
        self.centrality
    }

    /// Updates the expected mean, repairing it if out of domain.
    #[inline]
    pub fn set_expected(&mut self, expected: f64) {
        self.expected = sanitise_expected(expected);
    }

    /// Updates the centrality, repairing it if non-finite.
    #[inline]
    pub fn set_centrality(&mut self, centrality: f64) {
        self.centrality = sanitise_centrality(centrality);
    }

    /// Whether this configuration leaves doubles unbiased.
    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.expected == DEFAULT_EXPECTED && self.centrality == 0.0
    }
}

impl Default for BiasConfig {
    fn default() -> Self {
        Self {
            expected: DEFAULT_EXPECTED,
            centrality: 0.0,
        }
    }
}

/// Builder for [`BiasConfig`].
///
/// Unset parameters take their defaults (`expected = 0.5`,
/// `centrality = 0`). Building never fails.
#[derive(Clone, Debug, Default)]
pub struct BiasConfigBuilder {
    expected: Option<f64>,
    centrality: Option<f64>,
}

impl BiasConfigBuilder {
    /// Sets the expected mean.
    ///
    /// # Arguments
    ///
    /// * `expected` - Mean in `[0, 1)`, clamped to `[0.1, 0.9)`
    #[inline]
    pub fn expected(mut self, expected: f64) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Sets the centrality.
    ///
    /// # Arguments
    ///
    /// * `centrality` - Blend weight relative to 100; sign picks the blend
    #[inline]
    pub fn centrality(mut self, centrality: f64) -> Self {
        self.centrality = Some(centrality);
        self
    }

    /// Builds the configuration, repairing out-of-domain values.
    pub fn build(self) -> BiasConfig {
        BiasConfig::new(
            self.expected.unwrap_or(DEFAULT_EXPECTED),
            self.centrality.unwrap_or(0.0),
        )
    }
}

/// Unrepaired wire form; deserialisation routes through [`BiasConfig::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBiasConfig {
    #[serde(default = "default_expected")]
    expected: f64,
    #[serde(default)]
    centrality: f64,
}

#[cfg(feature = "serde")]
fn default_expected() -> f64 {
    DEFAULT_EXPECTED
}

#[cfg(feature = "serde")]
impl From<RawBiasConfig> for BiasConfig {
    fn from(raw: RawBiasConfig) -> Self {
        BiasConfig::new(raw.expected, raw.centrality)
    }
}

/// Smallest accepted canvas dimension in pixels (inclusive)
pub const MIN_CANVAS: u32 = 512;

/// Largest accepted canvas dimension in pixels (inclusive)
pub const MAX_CANVAS: u32 = 4096;

/// Flow: angular tolerance around 45° (degrees, measured in canvas space)
/// within which the principal axis classifies as diagonal
pub const DIAGONAL_TOLERANCE_DEG: f64 = 15.0;

/// Flow: maximum stddev/mean ratio of centroid distances for radial
pub const RADIAL_TOLERANCE: f64 = 0.25;

/// Flow: minimum star count for a radial classification
pub const MIN_RADIAL_STARS: usize = 3;

/// Flow: major-axis stddev below which the pattern is scattered
/// (minor ≤ major, so this bounds both axes)
pub const SCATTER_SPAN: f64 = 0.15;

/// Balance: half-width of the symmetric band around canvas center (0.5)
pub const BALANCE_BAND: f64 = 0.1;

/// Distribution: minor/major stddev ratio below which a pattern is linear
pub const LINEAR_RATIO: f64 = 0.25;

/// Distribution: major-axis stddev above which a pattern is dispersed
pub const DISPERSED_SPAN: f64 = 0.3;

/// Numerical epsilon for near-zero comparisons
pub const EPSILON: f64 = 1e-9;

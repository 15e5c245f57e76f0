//! Configuration options for the calculators.

/// Default number of fractional digits kept by a division.
pub const DEFAULT_SCALE: u32 = 4;

/// Largest scale a calculator accepts.
pub const MAX_SCALE: u32 = 10_000;

/// Default limit on bracket nesting.
///
/// Each level is one recursive evaluation, so this has to fit comfortably in
/// a 2 MiB thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration options shared by both calculators.
///
/// # Example
///
/// ```
/// use decicalc_core::api::CalculatorOptions;
///
/// let options = CalculatorOptions {
///     scale: 10,
///     ..CalculatorOptions::default()
/// };
/// assert_eq!(options.max_depth, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// Number of fractional digits a division rounds its quotient to
    /// (half-up). Addition, subtraction and multiplication are exact.
    /// At most [`MAX_SCALE`].
    ///
    /// Default: 4
    pub scale: u32,

    /// Maximum bracket nesting depth (for recursion protection).
    ///
    /// Only the infix calculator nests; postfix input has no brackets.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CalculatorOptions {
    /// Default options with the given scale.
    pub fn with_scale(scale: u32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }
}

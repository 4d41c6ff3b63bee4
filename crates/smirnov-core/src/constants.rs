//! Constants used throughout the crate.

/// Default significance level for reject/retain decisions.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Largest `n` for which the two-sided null distribution is routed through the
/// exact (Durbin matrix / Smirnov sum) branches everywhere.
pub const N_EXACT: usize = 500;

/// Beyond this `n` the Durbin matrix is never used; Pelz–Good takes over.
pub const N_KOLMOGOROV: usize = 100_000;

/// Beyond this `n` the one-sided upper tail uses the asymptotic formula
/// instead of Smirnov's finite sum.
pub const N_SMIRNOV_ASYMPTOTIC: usize = 200_000;

/// `n·d²` below which the exact Durbin matrix is used for `n <= N_EXACT`.
pub const W_DURBIN: f64 = 4.0;

/// `n·d²` above which the two-sided tail is twice the one-sided tail for
/// `n > N_EXACT`.
pub const W_UPPER_LARGE_N: f64 = 2.65;

/// `n·d²` at or beyond which the two-sided tail probability is zero in f64.
pub const W_TAIL_ZERO: f64 = 370.0;

/// `n·d²` at or beyond which the CDF is one in f64.
pub const W_CDF_ONE: f64 = 18.0;

/// `n·d²` at or below which the two-sided tail probability is one in f64.
pub const W_TAIL_ONE: f64 = 0.0274;

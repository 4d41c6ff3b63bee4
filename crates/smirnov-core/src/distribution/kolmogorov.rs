//! Null distribution of the Kolmogorov–Smirnov statistic.
//!
//! For a sample of size `n` from a continuous distribution, `Dn` is the
//! supremum distance between the ECDF and the true CDF, and `Dn+` the one-sided
//! supremum. This module evaluates
//!
//! - `P(Dn < d)` ([`KolmogorovSmirnovDistribution::distribution_function`]),
//! - `P(Dn >= d)` ([`KolmogorovSmirnovDistribution::complementary_distribution_function`]),
//! - `P(Dn+ >= d)` ([`KolmogorovSmirnovDistribution::one_side_upper_tail`]).
//!
//! Evaluation follows Simard & L'Ecuyer (2011), "Computing the Two-Sided
//! Kolmogorov-Smirnov Distribution": closed forms near the ends of the support,
//! the Durbin matrix (Marsaglia, Tsang & Wang 2003) in the body, Smirnov's
//! one-sided sum in the far upper tail, and the Pelz–Good series for large `n`.
//! Where Simard & L'Ecuyer use the Pomeranz recursion the Durbin matrix is used
//! instead; both are exact.

use core::f64::consts::PI;

use nalgebra::DMatrix;

use crate::constants::{
    N_EXACT, N_KOLMOGOROV, N_SMIRNOV_ASYMPTOTIC, W_CDF_ONE, W_DURBIN, W_TAIL_ONE, W_TAIL_ZERO,
    W_UPPER_LARGE_N,
};
use crate::error::{Result, TestError};
use crate::math;

/// Matrix elements above this are rescaled during the Durbin matrix power.
const RESCALE: f64 = 1e140;
const RESCALE_EXP: i32 = 140;

/// The distribution of `Dn` for a fixed sample size `n`.
///
/// In the two-sample test `n` is the effective sample size
/// `round(n1·n2 / (n1+n2))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KolmogorovSmirnovDistribution {
    n: usize,
}

impl KolmogorovSmirnovDistribution {
    /// Create the distribution for sample size `n`.
    ///
    /// # Errors
    ///
    /// [`TestError::InvalidDistributionSize`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(TestError::InvalidDistributionSize);
        }
        Ok(Self { n })
    }

    /// The sample size this distribution was built for.
    pub fn sample_size(&self) -> usize {
        self.n
    }

    /// `P(Dn < d)`.
    ///
    /// Returns 0 for `d <= 1/(2n)` and 1 for `d >= 1`. NaN input yields NaN.
    pub fn distribution_function(&self, d: f64) -> f64 {
        if d.is_nan() {
            return f64::NAN;
        }
        clamp_probability(cdf(self.n, d))
    }

    /// `P(Dn >= d)`, the two-sided p-value of an observed statistic `d`.
    ///
    /// Computed directly rather than as `1 - distribution_function(d)` so that
    /// small tail probabilities keep their relative precision.
    pub fn complementary_distribution_function(&self, d: f64) -> f64 {
        if d.is_nan() {
            return f64::NAN;
        }
        clamp_probability(complementary_cdf(self.n, d))
    }

    /// `P(Dn+ >= d)`, the one-sided p-value of an observed statistic `d`.
    ///
    /// By symmetry this is also `P(Dn- >= d)`.
    pub fn one_side_upper_tail(&self, d: f64) -> f64 {
        if d.is_nan() {
            return f64::NAN;
        }
        if d <= 0.0 {
            return 1.0;
        }
        if d >= 1.0 {
            return 0.0;
        }
        clamp_probability(smirnov_upper(self.n, d))
    }
}

fn clamp_probability(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

/// Two-sided CDF routing.
fn cdf(n: usize, x: f64) -> f64 {
    let nf = n as f64;
    let w = nf * x * x;

    if x >= 1.0 || w >= W_CDF_ONE {
        return 1.0;
    }
    if x <= 0.5 / nf {
        return 0.0;
    }
    if n == 1 {
        return 2.0 * x - 1.0;
    }
    if x <= 1.0 / nf {
        // n! (2x - 1/n)^n
        return math::exp(math::ln_factorial(n) + nf * math::ln(2.0 * x - 1.0 / nf));
    }
    if x >= 1.0 - 1.0 / nf {
        return 1.0 - 2.0 * math::powi(1.0 - x, n as i32);
    }

    if n <= N_EXACT {
        if w < W_DURBIN {
            return durbin(n, x);
        }
        return 1.0 - 2.0 * smirnov_upper(n, x);
    }

    if w * x * nf <= 7.0 && n <= N_KOLMOGOROV {
        return durbin(n, x);
    }
    pelz_good(n, x)
}

/// Two-sided complementary CDF routing.
fn complementary_cdf(n: usize, x: f64) -> f64 {
    let nf = n as f64;
    let w = nf * x * x;

    if x >= 1.0 || w >= W_TAIL_ZERO {
        return 0.0;
    }
    if x <= 0.5 / nf || w <= W_TAIL_ONE {
        return 1.0;
    }
    if n == 1 {
        return 2.0 - 2.0 * x;
    }
    if x <= 1.0 / nf {
        return 1.0 - cdf(n, x);
    }
    if x >= 1.0 - 1.0 / nf {
        return 2.0 * math::powi(1.0 - x, n as i32);
    }

    if n <= N_EXACT {
        if w < W_DURBIN {
            return 1.0 - durbin(n, x);
        }
        return 2.0 * smirnov_upper(n, x);
    }

    if w >= W_UPPER_LARGE_N {
        return 2.0 * smirnov_upper(n, x);
    }
    1.0 - cdf(n, x)
}

/// `P(Dn+ >= x)` for `0 < x < 1`.
///
/// Smirnov's exact sum (Birnbaum & Tingey form):
/// ```text
/// (1-x)^n + x · Σ_{j=1}^{⌊n(1-x)⌋} C(n,j) (x + j/n)^(j-1) (1 - x - j/n)^(n-j)
/// ```
/// evaluated term by term in log space.
fn smirnov_upper(n: usize, x: f64) -> f64 {
    if n > N_SMIRNOV_ASYMPTOTIC {
        return smirnov_upper_asymptotic(n, x);
    }

    let nf = n as f64;
    let jmax = math::floor(nf * (1.0 - x)) as usize;

    let mut sum = 0.0;
    for j in 1..=jmax {
        let jf = j as f64;
        let q = jf / nf + x;
        // Terms with 1 - x - j/n <= 0 vanish.
        if q >= 1.0 {
            break;
        }
        let log_term = math::ln_binomial(n, j)
            + (jf - 1.0) * math::ln(q)
            + (nf - jf) * math::ln_1p(-q);
        sum += math::exp(log_term);
    }

    x * sum + math::exp(nf * math::ln_1p(-x))
}

/// Large-`n` approximation of `P(Dn+ >= x)`:
/// `(1 - (2z² - 4z - 1)/(18n)) · e^(-z)` with `z = (6nx + 1)² / (18n)`.
fn smirnov_upper_asymptotic(n: usize, x: f64) -> f64 {
    let nf = n as f64;
    let t = 6.0 * nf * x + 1.0;
    let z = t * t / (18.0 * nf);
    let v = 1.0 - (2.0 * z * z - 4.0 * z - 1.0) / (18.0 * nf);
    if v <= 0.0 {
        return 0.0;
    }
    v * math::exp(-z)
}

/// Exact `P(Dn < d)` as an element of the `n`-th power of a `(2k-1)×(2k-1)`
/// matrix, `k = ⌊nd⌋ + 1`.
///
/// Matrix entries overflow long before the result does, so powers carry a
/// separate base-10 exponent.
fn durbin(n: usize, d: f64) -> f64 {
    let nf = n as f64;
    let k = math::floor(nf * d) as usize + 1;
    let m = 2 * k - 1;
    let h = k as f64 - nf * d;

    let mut hm = DMatrix::<f64>::zeros(m, m);
    for i in 0..m {
        for j in 0..m {
            if i + 1 >= j {
                hm[(i, j)] = 1.0;
            }
        }
    }
    for i in 0..m {
        hm[(i, 0)] -= math::powi(h, (i + 1) as i32);
        hm[(m - 1, i)] -= math::powi(h, (m - i) as i32);
    }
    if 2.0 * h - 1.0 > 0.0 {
        hm[(m - 1, 0)] += math::powi(2.0 * h - 1.0, m as i32);
    }
    for i in 0..m {
        for j in 0..m {
            if i + 1 > j {
                for g in 1..=(i + 1 - j) {
                    hm[(i, j)] /= g as f64;
                }
            }
        }
    }

    let (q, mut exponent) = matrix_power(&hm, 0, n);
    let mut s = q[(k - 1, k - 1)];
    for i in 1..=n {
        s = s * i as f64 / nf;
        if s < 1.0 / RESCALE {
            s *= RESCALE;
            exponent -= RESCALE_EXP;
        }
    }
    s * math::powi(10.0, exponent)
}

/// `a^n` by repeated squaring, rescaling whenever the central element grows
/// past [`RESCALE`]. Returns the matrix and its accumulated base-10 exponent.
fn matrix_power(a: &DMatrix<f64>, exponent: i32, n: usize) -> (DMatrix<f64>, i32) {
    if n == 1 {
        return (a.clone(), exponent);
    }

    let (half, half_exp) = matrix_power(a, exponent, n / 2);
    let squared = &half * &half;
    let (mut v, mut v_exp) = if n % 2 == 0 {
        (squared, 2 * half_exp)
    } else {
        (a * &squared, exponent + 2 * half_exp)
    };

    let center = a.nrows() / 2;
    if v[(center, center)] > RESCALE {
        v *= 1.0 / RESCALE;
        v_exp += RESCALE_EXP;
    }
    (v, v_exp)
}

/// Pelz–Good asymptotic series for `P(Dn < x)`, accurate to a few units in
/// the 7th decimal for `n >= 100` and all `x`.
fn pelz_good(n: usize, x: f64) -> f64 {
    const JMAX: usize = 20;
    const EPS: f64 = 1.0e-10;
    // sqrt(2π) and sqrt(π/2)
    const C: f64 = 2.506_628_274_631_000_7;
    const C2: f64 = 1.253_314_137_315_500_3;

    let nf = n as f64;
    let pi2 = PI * PI;
    let pi4 = pi2 * pi2;
    let rac_n = math::sqrt(nf);
    let z = rac_n * x;
    let z2 = z * z;
    let z4 = z2 * z2;
    let z6 = z4 * z2;
    let w = pi2 / (2.0 * z2);

    // K0: the Kolmogorov limit.
    let mut sum = 0.0;
    let mut term = 1.0;
    let mut j = 0;
    while j <= JMAX && term > EPS * sum {
        let ti = j as f64 + 0.5;
        term = math::exp(-ti * ti * w);
        sum += term;
        j += 1;
    }
    sum *= C / z;

    // 1/sqrt(n)
    let mut tom = 0.0;
    term = 1.0;
    j = 0;
    while j <= JMAX && math::abs(term) > EPS * math::abs(tom) {
        let ti = j as f64 + 0.5;
        term = (pi2 * ti * ti - z2) * math::exp(-pi2 * ti * ti / (2.0 * z2));
        tom += term;
        j += 1;
    }
    sum += tom * C2 / (rac_n * 3.0 * z4);

    // 1/n, first part
    tom = 0.0;
    term = 1.0;
    j = 0;
    while j <= JMAX && math::abs(term) > EPS * math::abs(tom) {
        let ti = j as f64 + 0.5;
        let ti2 = ti * ti;
        term = 6.0 * z6
            + 2.0 * z4
            + pi2 * (2.0 * z4 - 5.0 * z2) * ti2
            + pi4 * (1.0 - 2.0 * z2) * ti2 * ti2;
        term *= math::exp(-pi2 * ti2 / (2.0 * z2));
        tom += term;
        j += 1;
    }
    sum += tom * C2 / (nf * 36.0 * z * z6);

    // 1/n, second part
    tom = 0.0;
    term = 1.0;
    j = 1;
    while j <= JMAX && term > EPS * tom {
        let ti = j as f64;
        term = pi2 * ti * ti * math::exp(-pi2 * ti * ti / (2.0 * z2));
        tom += term;
        j += 1;
    }
    sum -= tom * C2 / (nf * 18.0 * z * z2);

    // 1/n^(3/2), first part
    tom = 0.0;
    term = 1.0;
    j = 0;
    while j <= JMAX && math::abs(term) > EPS * math::abs(tom) {
        let ti = math::sq(j as f64 + 0.5);
        term = -30.0 * z6 - 90.0 * z6 * z2
            + pi2 * (135.0 * z4 - 96.0 * z6) * ti
            + pi4 * (212.0 * z4 - 60.0 * z2) * ti * ti
            + pi2 * pi4 * ti * ti * ti * (5.0 - 30.0 * z2);
        term *= math::exp(-pi2 * ti / (2.0 * z2));
        tom += term;
        j += 1;
    }
    sum += tom * C2 / (rac_n * nf * 3240.0 * z4 * z6);

    // 1/n^(3/2), second part
    tom = 0.0;
    term = 1.0;
    j = 1;
    while j <= JMAX && math::abs(term) > EPS * math::abs(tom) {
        let ti = math::sq(j as f64);
        term = (3.0 * pi2 * ti * z2 - pi4 * ti * ti) * math::exp(-pi2 * ti / (2.0 * z2));
        tom += term;
        j += 1;
    }
    sum += tom * C2 / (rac_n * nf * 108.0 * z6);

    sum
}

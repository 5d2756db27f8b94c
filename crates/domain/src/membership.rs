//! Membership functions — trapezoids evaluated in closed form, plus the
//! sampled duration domains the consequent side of a rule is aggregated over.
//!
//! A membership function is conceptually a pure `degree(x) -> [0, 1]`. The
//! antecedent (temperature) side is evaluated directly; the consequent
//! (duration) side is sampled at a fixed interval so clipped vectors can be
//! aggregated elementwise and defuzzified by centroid.

/// A trapezoidal membership function over `[a, d]`.
///
/// `degree(x)` is 0 for `x <= a`, ramps linearly 0→1 over `[a, b]`, is 1 over
/// `[b, c]`, ramps 1→0 over `[c, d]`, and is 0 for `x >= d`. Degenerate
/// breakpoints express the other shapes: a shoulder pins one flat edge to the
/// domain boundary, a peak sets `b == c`, and a singleton collapses all four
/// breakpoints onto one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Trapezoid {
    /// Full trapezoid with breakpoints `a <= b <= c <= d`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        debug_assert!(a <= b && b <= c && c <= d, "breakpoints must be ordered");
        Self { a, b, c, d }
    }

    /// Left shoulder: degree 1 from the domain minimum up to `c`, falling to
    /// 0 at `d`.
    #[must_use]
    pub fn shoulder_left(min: f64, c: f64, d: f64) -> Self {
        Self::new(min, min, c, d)
    }

    /// Right shoulder: degree 0 until `a`, rising to 1 at `b` and staying 1
    /// up to the domain maximum.
    #[must_use]
    pub fn shoulder_right(a: f64, b: f64, max: f64) -> Self {
        Self::new(a, b, max, max)
    }

    /// Triangular peak at `b`.
    #[must_use]
    pub fn peak(a: f64, b: f64, d: f64) -> Self {
        Self::new(a, b, b, d)
    }

    /// Degenerate point shape: degree 1 exactly at `value`, 0 elsewhere.
    #[must_use]
    pub fn singleton(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Membership degree of `x`, in `[0, 1]`.
    #[must_use]
    pub fn degree(&self, x: f64) -> f64 {
        // Flat top first so degenerate ramps (shoulders, singletons) never
        // divide by a zero-width interval.
        if x >= self.b && x <= self.c {
            1.0
        } else if x <= self.a || x >= self.d {
            0.0
        } else if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.d - x) / (self.d - self.c)
        }
    }

    /// The interval outside which the degree is 0.
    #[must_use]
    pub fn support(&self) -> (f64, f64) {
        (self.a, self.d)
    }
}

/// A bounded duration domain `[0, max]` sampled every `step` minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationDomain {
    max: f64,
    step: f64,
}

impl DurationDomain {
    /// Domain from 0 to `max` minutes, sampled every `step` minutes.
    #[must_use]
    pub fn new(max: f64, step: f64) -> Self {
        debug_assert!(max > 0.0 && step > 0.0);
        Self { max, step }
    }

    /// Number of sample points, including both endpoints.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn len(&self) -> usize {
        (self.max / self.step) as usize + 1
    }

    /// A sampled domain always contains at least the origin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Duration in minutes at sample index `i`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self, i: usize) -> f64 {
        i as f64 * self.step
    }

    /// Sampling interval in minutes.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Upper bound of the domain in minutes.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sample a membership function over every point of this domain.
    #[must_use]
    pub fn sample(&self, mf: &Trapezoid) -> Vec<f64> {
        (0..self.len()).map(|i| mf.degree(self.value(i))).collect()
    }
}

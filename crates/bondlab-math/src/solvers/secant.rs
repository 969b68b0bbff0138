//! Secant root-finding algorithm.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Secant root-finding algorithm, safeguarded by bisection.
///
/// Seeded with `lower` and `upper` and iterated as
///
/// $$x_{k+1} = x_k - f(x_k) \frac{x_k - x_{k-1}}{f(x_k) - f(x_{k-1})}$$
///
/// until `|f(x_k)| <= tolerance`. If the upper seed already satisfies the
/// tolerance it is returned with zero iterations.
///
/// The seeds need not bracket the root. When they do (`f(lower)` and
/// `f(upper)` have opposite signs) the sign-change interval is kept up to
/// date after every evaluation, and a step that would leave it, or that is
/// not finite, is replaced by a bisection of the interval. Two consecutive
/// steps that fail to halve the interval also force a bisection. A
/// bracketed search therefore always converges for a continuous `f`.
///
/// # Errors
///
/// - `MathError::RootNotFound` if an unbracketed iterate or its function
///   value is not finite, which happens when two function values coincide
/// - `MathError::MaxIterationsExceeded` if the cap is hit first
/// - `MathError::InvalidInput` for a non-positive tolerance or non-finite seeds
///
/// # Example
///
/// ```rust
/// use bondlab_math::solvers::{secant, SolverConfig};
///
/// let f = |x: f64| (2.0 * x - 8.0) * (x + 7.0);
///
/// let left = secant(f, -10.0, 0.0, &SolverConfig::default()).unwrap();
/// let right = secant(f, 0.0, 10.0, &SolverConfig::default()).unwrap();
/// assert!((left.root + 7.0).abs() < 1e-10);
/// assert!((right.root - 4.0).abs() < 1e-10);
/// ```
pub fn secant<F>(f: F, lower: f64, upper: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    if config.tolerance.is_nan() || config.tolerance <= 0.0 {
        return Err(MathError::invalid_input(format!(
            "tolerance must be positive, got {}",
            config.tolerance
        )));
    }
    if !lower.is_finite() || !upper.is_finite() {
        return Err(MathError::invalid_input(format!(
            "seeds must be finite, got [{lower}, {upper}]"
        )));
    }

    let mut x_prev = lower;
    let mut x_curr = upper;
    let mut f_prev = f(x_prev);
    let mut f_curr = f(x_curr);
    let mut iterations = 0;

    if !f_prev.is_finite() || !f_curr.is_finite() {
        return Err(MathError::root_not_found(lower, upper));
    }

    // Sign-change interval as (a, f(a), b, f(b)), present only when seeded
    let mut bracket = (f_prev * f_curr < 0.0).then_some((x_prev, f_prev, x_curr, f_curr));
    let mut slow_steps = 0;

    while f_curr.abs() > config.tolerance {
        if iterations >= config.max_iterations {
            debug!(
                "secant gave up after {iterations} iterations from [{lower}, {upper}], residual {f_curr:.3e}"
            );
            return Err(MathError::max_iterations_exceeded(
                iterations,
                f_curr,
                lower,
                upper,
            ));
        }

        let mut x_next = x_curr - f_curr * (x_curr - x_prev) / (f_curr - f_prev);
        let width_before = bracket.map(|(a, _, b, _)| (b - a).abs());

        if let Some((a, _, b, _)) = bracket {
            let inside = x_next.is_finite() && x_next > a.min(b) && x_next < a.max(b);
            if !inside || slow_steps >= 2 {
                trace!("secant step {x_next} replaced by bisection of [{a}, {b}]");
                x_next = 0.5 * (a + b);
                slow_steps = 0;
            }
        } else if !x_next.is_finite() {
            return Err(MathError::root_not_found(lower, upper));
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr);
        iterations += 1;

        if !f_curr.is_finite() {
            return Err(MathError::root_not_found(lower, upper));
        }

        if let Some((a, fa, b, fb)) = bracket {
            let narrowed = if (f_curr < 0.0) == (fa < 0.0) {
                (x_curr, f_curr, b, fb)
            } else {
                (a, fa, x_curr, f_curr)
            };
            let width_after = (narrowed.2 - narrowed.0).abs();
            if width_before.is_some_and(|w| width_after > 0.5 * w) {
                slow_steps += 1;
            } else {
                slow_steps = 0;
            }
            bracket = Some(narrowed);
        }
        trace!("secant iteration {iterations}: x = {x_curr}, f = {f_curr:.3e}");
    }

    debug!("secant converged to {x_curr} in {iterations} iterations, residual {f_curr:.3e}");

    Ok(SolverResult {
        root: x_curr,
        iterations,
        residual: f_curr,
    })
}

//! Stateful yield curve.
//!
//! A [`YieldCurve`] holds one series of annual quotes (par or spot), an
//! optional spread, and the nodes of its last successful bootstrap.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use bondlab_core::report::{Report, ReportField};
use bondlab_math::interpolation::{Interpolator, LinearInterpolator};

use crate::bootstrap::{par_to_spot, spot_to_par, BootstrapOutput};
use crate::error::{CurveError, CurveResult};

/// Market quotes a curve is built from, one per whole-year node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurveQuotes {
    /// Par (coupon) yields.
    Par(Vec<f64>),
    /// Spot (zero) yields.
    Spot(Vec<f64>),
}

impl CurveQuotes {
    /// Quote values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            CurveQuotes::Par(values) | CurveQuotes::Spot(values) => values,
        }
    }

    /// Name of the quote type.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            CurveQuotes::Par(_) => "par",
            CurveQuotes::Spot(_) => "spot",
        }
    }
}

/// Spread applied during bootstrapping. Node 0 is never shifted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum SpreadAdjustment {
    /// No spread.
    #[default]
    None,
    /// Added to the quotes before bootstrapping.
    Credit(Vec<f64>),
    /// Added to both yield series after bootstrapping; discount factors are
    /// recomputed from the shifted spot yields.
    ZSpread(Vec<f64>),
}

impl SpreadAdjustment {
    fn values(&self) -> Option<&[f64]> {
        match self {
            SpreadAdjustment::None => None,
            SpreadAdjustment::Credit(values) | SpreadAdjustment::ZSpread(values) => Some(values),
        }
    }
}

/// Par yields, spot yields and discount factors at each node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveNodes {
    /// Par yields.
    pub par_yields: Vec<f64>,
    /// Spot yields.
    pub spot_yields: Vec<f64>,
    /// Discount factors.
    pub discount_factors: Vec<f64>,
}

impl CurveNodes {
    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spot_yields.len()
    }

    /// True if there are no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spot_yields.is_empty()
    }
}

/// A yield curve on annual nodes `0..N`.
///
/// # Example
///
/// ```rust
/// use bondlab_curves::prelude::*;
///
/// let mut curve = YieldCurve::new(CurveQuotes::Par(vec![0.0, 0.08, 0.09, 0.10, 0.11])).unwrap();
/// let nodes = curve.bootstrap_spot_yields().unwrap().clone();
/// assert!((nodes.spot_yields[4] - 0.11301161161266693).abs() < 1e-12);
///
/// let df = curve.discount_factor_at(2.5).unwrap();
/// assert!(df < nodes.discount_factors[2] && df > nodes.discount_factors[3]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldCurve {
    quotes: CurveQuotes,
    spread: SpreadAdjustment,
    nodes: Option<CurveNodes>,
}

impl YieldCurve {
    /// Creates a curve from quotes.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InsufficientPoints` if there are no quotes.
    pub fn new(quotes: CurveQuotes) -> CurveResult<Self> {
        if quotes.values().is_empty() {
            return Err(CurveError::InsufficientPoints {
                required: 1,
                actual: 0,
            });
        }

        Ok(Self {
            quotes,
            spread: SpreadAdjustment::None,
            nodes: None,
        })
    }

    /// Sets the spread applied on the next bootstrap.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::NoCommonBasis` if the spread and quotes differ in length.
    pub fn with_spread(mut self, spread: SpreadAdjustment) -> CurveResult<Self> {
        self.set_spread(spread)?;
        Ok(self)
    }

    /// Replaces the spread. Existing nodes are kept until the next bootstrap.
    pub fn set_spread(&mut self, spread: SpreadAdjustment) -> CurveResult<()> {
        if let Some(values) = spread.values() {
            let nodes = self.quotes.values().len();
            if values.len() != nodes {
                return Err(CurveError::no_common_basis(format!(
                    "{} spreads for {nodes} quotes",
                    values.len()
                )));
            }
        }
        self.spread = spread;
        Ok(())
    }

    /// Returns the quotes.
    #[must_use]
    pub fn quotes(&self) -> &CurveQuotes {
        &self.quotes
    }

    /// Returns the spread.
    #[must_use]
    pub fn spread(&self) -> &SpreadAdjustment {
        &self.spread
    }

    /// Returns the nodes of the last successful bootstrap.
    #[must_use]
    pub fn nodes(&self) -> Option<&CurveNodes> {
        self.nodes.as_ref()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.values().len()
    }

    /// Always false; a curve holds at least one node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.values().is_empty()
    }

    /// Tenor in years of the last node.
    #[must_use]
    pub fn max_tenor(&self) -> f64 {
        self.len().saturating_sub(1) as f64
    }

    /// Bootstraps spot yields from par quotes.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::IncompatibleQuotes` if the curve holds spot quotes.
    pub fn bootstrap_spot_yields(&mut self) -> CurveResult<&CurveNodes> {
        if let CurveQuotes::Spot(_) = self.quotes {
            return Err(CurveError::incompatible_quotes("par", "spot"));
        }
        self.bootstrap()
    }

    /// Derives par yields from spot quotes.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::IncompatibleQuotes` if the curve holds par quotes.
    pub fn bootstrap_par_yields(&mut self) -> CurveResult<&CurveNodes> {
        if let CurveQuotes::Par(_) = self.quotes {
            return Err(CurveError::incompatible_quotes("spot", "par"));
        }
        self.bootstrap()
    }

    /// Bootstraps in whichever direction the quotes allow and stores the nodes.
    ///
    /// On error the previous nodes are left untouched.
    pub fn bootstrap(&mut self) -> CurveResult<&CurveNodes> {
        let nodes = match self.build_nodes() {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!("{} curve bootstrap rejected: {e}", self.quotes.kind());
                return Err(e);
            }
        };

        debug!(
            "bootstrapped {} nodes from {} quotes",
            nodes.len(),
            self.quotes.kind()
        );
        Ok(self.nodes.insert(nodes))
    }

    /// Discount factor at a fractional tenor in years.
    ///
    /// The spot yield is linearly interpolated between the bracketing nodes
    /// and compounded annually.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::NotBootstrapped` before the first bootstrap and
    /// `CurveError::TenorOutOfRange` outside `[0, N-1]`.
    pub fn discount_factor_at(&self, tenor: f64) -> CurveResult<f64> {
        let nodes = self.nodes.as_ref().ok_or(CurveError::NotBootstrapped)?;

        let max = self.max_tenor();
        if !(0.0..=max).contains(&tenor) {
            return Err(CurveError::TenorOutOfRange {
                requested: tenor,
                min: 0.0,
                max,
            });
        }
        if tenor == 0.0 {
            return Ok(1.0);
        }

        let tenors = (0..nodes.len()).map(|i| i as f64).collect();
        let spot = LinearInterpolator::new(tenors, nodes.spot_yields.clone())?.interpolate(tenor)?;

        Ok((1.0 + spot).powf(-tenor))
    }

    fn build_nodes(&self) -> CurveResult<CurveNodes> {
        let mut quotes = self.quotes.values().to_vec();
        if let SpreadAdjustment::Credit(spread) = &self.spread {
            add_beyond_first(&mut quotes, spread);
        }

        let mut nodes = match &self.quotes {
            CurveQuotes::Par(_) => {
                let BootstrapOutput {
                    yields,
                    discount_factors,
                } = par_to_spot(&quotes)?;
                CurveNodes {
                    par_yields: quotes,
                    spot_yields: yields,
                    discount_factors,
                }
            }
            CurveQuotes::Spot(_) => {
                let BootstrapOutput {
                    yields,
                    discount_factors,
                } = spot_to_par(&quotes)?;
                CurveNodes {
                    par_yields: yields,
                    spot_yields: quotes,
                    discount_factors,
                }
            }
        };

        if let SpreadAdjustment::ZSpread(spread) = &self.spread {
            add_beyond_first(&mut nodes.spot_yields, spread);
            add_beyond_first(&mut nodes.par_yields, spread);
            nodes.discount_factors = nodes
                .spot_yields
                .iter()
                .enumerate()
                .map(|(i, spot)| (1.0 + spot).powi(-(i as i32)))
                .collect();
        }

        Ok(nodes)
    }
}

fn add_beyond_first(values: &mut [f64], spread: &[f64]) {
    for (value, s) in values.iter_mut().zip(spread).skip(1) {
        *value += s;
    }
}

impl Default for YieldCurve {
    /// Four-node par curve at 0%, 6%, 6.7% and 6.85%.
    fn default() -> Self {
        Self {
            quotes: CurveQuotes::Par(vec![0.0, 0.06, 0.067, 0.0685]),
            spread: SpreadAdjustment::None,
            nodes: None,
        }
    }
}

impl Report for YieldCurve {
    fn title(&self) -> String {
        "Yield Curve".to_string()
    }

    fn fields(&self) -> Vec<ReportField> {
        let quote_label = match self.quotes {
            CurveQuotes::Par(_) => "Par",
            CurveQuotes::Spot(_) => "Spot",
        };

        let mut fields: Vec<ReportField> = self
            .quotes
            .values()
            .iter()
            .enumerate()
            .map(|(i, q)| ReportField::input(format!("{quote_label} {i}Y"), *q))
            .collect();

        if let Some(spread) = self.spread.values() {
            let label = match self.spread {
                SpreadAdjustment::ZSpread(_) => "Z-Spread",
                _ => "Credit Spread",
            };
            fields.extend(
                spread
                    .iter()
                    .enumerate()
                    .map(|(i, s)| ReportField::input(format!("{label} {i}Y"), *s)),
            );
        }

        if let Some(nodes) = &self.nodes {
            for (name, series) in [
                ("Spot", &nodes.spot_yields),
                ("Par", &nodes.par_yields),
                ("Discount", &nodes.discount_factors),
            ] {
                fields.extend(
                    series
                        .iter()
                        .enumerate()
                        .map(|(i, v)| ReportField::output(format!("{name} {i}Y"), *v)),
                );
            }
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PAR: [f64; 5] = [0.0, 0.08, 0.09, 0.10, 0.11];

    fn par_curve() -> YieldCurve {
        YieldCurve::new(CurveQuotes::Par(PAR.to_vec())).unwrap()
    }

    #[test]
    fn test_direction_must_match_quotes() {
        let mut curve = par_curve();
        assert!(matches!(
            curve.bootstrap_par_yields(),
            Err(CurveError::IncompatibleQuotes { .. })
        ));

        let mut spot = YieldCurve::new(CurveQuotes::Spot(vec![0.0, 0.05])).unwrap();
        assert!(matches!(
            spot.bootstrap_spot_yields(),
            Err(CurveError::IncompatibleQuotes { .. })
        ));
    }

    #[test]
    fn test_empty_quotes_rejected() {
        assert!(matches!(
            YieldCurve::new(CurveQuotes::Par(vec![])),
            Err(CurveError::InsufficientPoints { .. })
        ));
    }

    #[test]
    fn test_bootstrap_is_repeatable() {
        let mut curve = par_curve()
            .with_spread(SpreadAdjustment::Credit(vec![0.0, 0.01, 0.01, 0.01, 0.01]))
            .unwrap();
        let first = curve.bootstrap_spot_yields().unwrap().clone();
        let second = curve.bootstrap_spot_yields().unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(curve.quotes().values(), &PAR);
    }

    #[test]
    fn test_credit_spread_shifts_quotes() {
        let spread = vec![0.5, 0.01, 0.01, 0.01, 0.01];
        let mut spread_curve = par_curve()
            .with_spread(SpreadAdjustment::Credit(spread))
            .unwrap();
        let shifted = spread_curve.bootstrap_spot_yields().unwrap().clone();

        let mut plain = YieldCurve::new(CurveQuotes::Par(vec![0.0, 0.09, 0.10, 0.11, 0.12])).unwrap();
        let expected = plain.bootstrap_spot_yields().unwrap();

        // Node 0 ignores the spread
        assert_eq!(shifted.par_yields[0], 0.0);
        for i in 0..PAR.len() {
            assert_relative_eq!(shifted.spot_yields[i], expected.spot_yields[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_z_spread_shifts_outputs() {
        let z = vec![0.0, 0.002, 0.002, 0.002, 0.002];
        let mut plain = par_curve();
        let base = plain.bootstrap_spot_yields().unwrap().clone();

        let mut curve = par_curve().with_spread(SpreadAdjustment::ZSpread(z)).unwrap();
        let nodes = curve.bootstrap_spot_yields().unwrap();

        for i in 1..PAR.len() {
            assert_relative_eq!(nodes.spot_yields[i], base.spot_yields[i] + 0.002, epsilon = 1e-15);
            assert_relative_eq!(nodes.par_yields[i], PAR[i] + 0.002, epsilon = 1e-15);
            assert_relative_eq!(
                nodes.discount_factors[i],
                (1.0 + nodes.spot_yields[i]).powi(-(i as i32)),
                epsilon = 1e-15
            );
        }
        assert_eq!(nodes.discount_factors[0], 1.0);
    }

    #[test]
    fn test_spread_length_mismatch() {
        let result = par_curve().with_spread(SpreadAdjustment::ZSpread(vec![0.01; 3]));
        assert!(matches!(result, Err(CurveError::NoCommonBasis { .. })));
    }

    #[test]
    fn test_discount_factor_at() {
        let mut curve = par_curve();
        assert!(matches!(
            curve.discount_factor_at(1.0),
            Err(CurveError::NotBootstrapped)
        ));

        let nodes = curve.bootstrap_spot_yields().unwrap().clone();
        for i in 0..PAR.len() {
            assert_relative_eq!(
                curve.discount_factor_at(i as f64).unwrap(),
                nodes.discount_factors[i],
                epsilon = 1e-12
            );
        }

        let mid_spot = (nodes.spot_yields[1] + nodes.spot_yields[2]) / 2.0;
        assert_relative_eq!(
            curve.discount_factor_at(1.5).unwrap(),
            (1.0 + mid_spot).powf(-1.5),
            epsilon = 1e-15
        );

        assert!(matches!(
            curve.discount_factor_at(4.5),
            Err(CurveError::TenorOutOfRange { .. })
        ));
        assert!(curve.discount_factor_at(-0.1).is_err());
        assert!(curve.discount_factor_at(f64::NAN).is_err());
    }

    #[test]
    fn test_single_node_curve() {
        let mut curve = YieldCurve::new(CurveQuotes::Par(vec![0.03])).unwrap();
        let nodes = curve.bootstrap_spot_yields().unwrap();
        assert_eq!(nodes.spot_yields, vec![0.03]);

        assert_eq!(curve.discount_factor_at(0.0).unwrap(), 1.0);
        assert!(curve.discount_factor_at(0.5).is_err());
    }

    #[test]
    fn test_failed_bootstrap_keeps_nodes() {
        let mut curve = par_curve();
        let before = curve.bootstrap().unwrap().clone();

        curve
            .set_spread(SpreadAdjustment::Credit(vec![0.0, 0.0, 0.0, f64::NAN, 0.0]))
            .unwrap();
        assert!(curve.bootstrap().is_err());
        assert_eq!(curve.nodes(), Some(&before));
    }

    #[test]
    fn test_default_and_report() {
        let mut curve = YieldCurve::default();
        let nodes = curve.bootstrap_spot_yields().unwrap();
        assert_eq!(nodes.len(), 4);
        assert_relative_eq!(nodes.spot_yields[1], 0.06, epsilon = 1e-15);

        let text = curve.render();
        assert!(text.contains("##### Yield Curve #####"));
        assert!(text.contains("  | Par 3Y:"));
        assert!(text.contains("  | Spot 3Y:"));
        assert!(text.contains("  | Discount 3Y:"));
    }
}

//! Node-by-node bootstrap between par and spot yields.

use log::{debug, trace};

use super::BootstrapOutput;
use crate::error::{CurveError, CurveResult};

/// Strips spot yields from annual par yields.
///
/// For each node `i >= 1`, with `S` the sum of discount factors of nodes
/// `1..i`, the gross growth to node `i` is `(1 + par) / (1 - par * S)`.
///
/// # Errors
///
/// Returns `CurveError::InsufficientPoints` for an empty slice and
/// `CurveError::InvalidQuote` when a quote is not finite, not above -100%,
/// or implies a non-positive discount factor.
pub fn par_to_spot(par_yields: &[f64]) -> CurveResult<BootstrapOutput> {
    validate_quotes(par_yields)?;

    let mut yields = Vec::with_capacity(par_yields.len());
    let mut discount_factors = Vec::with_capacity(par_yields.len());

    yields.push(par_yields[0]);
    discount_factors.push(1.0 / (1.0 + par_yields[0]));

    let mut annuity = 0.0;
    for (i, &par) in par_yields.iter().enumerate().skip(1) {
        if i > 1 {
            annuity += discount_factors[i - 1];
        }

        let growth = (1.0 + par) / (1.0 - par * annuity);
        if !(growth.is_finite() && growth > 0.0) {
            return Err(CurveError::invalid_quote(
                i,
                format!("par yield {par} implies growth {growth}"),
            ));
        }

        let spot = growth.powf(1.0 / i as f64) - 1.0;
        trace!("node {i}: par {par}, annuity {annuity}, growth {growth}");

        yields.push(spot);
        discount_factors.push(1.0 / growth);
    }

    debug!("stripped {} spot yields from par", yields.len());
    Ok(BootstrapOutput {
        yields,
        discount_factors,
    })
}

/// Derives par yields from annual spot yields.
///
/// # Errors
///
/// Returns `CurveError::InsufficientPoints` for an empty slice and
/// `CurveError::InvalidQuote` when a quote is not finite or not above -100%.
pub fn spot_to_par(spot_yields: &[f64]) -> CurveResult<BootstrapOutput> {
    validate_quotes(spot_yields)?;

    let mut yields = Vec::with_capacity(spot_yields.len());
    let mut discount_factors = Vec::with_capacity(spot_yields.len());

    yields.push(spot_yields[0]);
    discount_factors.push(1.0 / (1.0 + spot_yields[0]));

    let mut annuity = 0.0;
    for (i, &spot) in spot_yields.iter().enumerate().skip(1) {
        let df = (1.0 + spot).powi(-(i as i32));
        annuity += df;

        let par = (1.0 - df) / annuity;
        trace!("node {i}: spot {spot}, df {df}, annuity {annuity}");

        yields.push(par);
        discount_factors.push(df);
    }

    debug!("derived {} par yields from spot", yields.len());
    Ok(BootstrapOutput {
        yields,
        discount_factors,
    })
}

fn validate_quotes(quotes: &[f64]) -> CurveResult<()> {
    if quotes.is_empty() {
        return Err(CurveError::InsufficientPoints {
            required: 1,
            actual: 0,
        });
    }

    if let Some((i, q)) = quotes
        .iter()
        .enumerate()
        .find(|(_, q)| !(q.is_finite() && **q > -1.0))
    {
        return Err(CurveError::invalid_quote(
            i,
            format!("yield {q} must be finite and above -100%"),
        ));
    }

    Ok(())
}

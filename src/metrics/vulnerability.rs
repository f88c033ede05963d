//! Heat vulnerability index
//!
//! Combines land-surface temperature, population density and lack of green
//! cover per zone. Inputs are zone-aligned slices; each is min-max normalized
//! across zones before weighting, so the index is relative to the zones given.

use crate::error::MetricsError;
use crate::utils::normalization::min_max_normalize;

/// Weight of normalized temperature
pub const TEMPERATURE_WEIGHT: f64 = 0.40;

/// Weight of normalized population density
pub const POPULATION_WEIGHT: f64 = 0.35;

/// Weight of normalized lack of green cover
pub const GREEN_DEFICIT_WEIGHT: f64 = 0.25;

/// Heat vulnerability per zone, in [0, 1].
///
/// index = 0.40 × T_norm + 0.35 × P_norm + 0.25 × (1 - G_norm)
pub fn calculate_heat_vulnerability_index(
    temperature: &[f64],
    population: &[f64],
    green_cover: &[f64],
) -> Result<Vec<f64>, MetricsError> {
    let expected = temperature.len();
    for found in [population.len(), green_cover.len()] {
        if found != expected {
            return Err(MetricsError::LengthMismatch { expected, found });
        }
    }

    let temp_norm = min_max_normalize(temperature);
    let pop_norm = min_max_normalize(population);
    let green_norm = min_max_normalize(green_cover);

    let index = temp_norm
        .iter()
        .zip(&pop_norm)
        .zip(&green_norm)
        .map(|((t, p), g)| {
            TEMPERATURE_WEIGHT * t + POPULATION_WEIGHT * p + GREEN_DEFICIT_WEIGHT * (1.0 - g)
        })
        .collect();

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vulnerability_extremes() {
        // Zone 0: coolest, sparsest, greenest. Zone 1: hottest, densest, barest.
        let index = calculate_heat_vulnerability_index(
            &[30.0, 36.0, 33.0],
            &[4_000.0, 20_000.0, 12_000.0],
            &[45.0, 5.0, 25.0],
        )
        .unwrap();

        assert_relative_eq!(index[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(index[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(index[2], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_vulnerability_constant_green_cover() {
        let index = calculate_heat_vulnerability_index(&[30.0, 34.0], &[10.0, 10.0], &[20.0, 20.0]).unwrap();
        // Green cover has no spread: deficit term contributes the full weight
        assert_relative_eq!(index[0], 0.25);
        assert_relative_eq!(index[1], 0.65, epsilon = 1e-12);
    }

    #[test]
    fn test_vulnerability_length_mismatch() {
        let err = calculate_heat_vulnerability_index(&[30.0, 31.0], &[1.0], &[2.0, 3.0]).unwrap_err();
        assert_eq!(err, MetricsError::LengthMismatch { expected: 2, found: 1 });

        assert!(calculate_heat_vulnerability_index(&[], &[], &[]).unwrap().is_empty());
    }
}

//! Thermal metrics: heat index, comfort index and lake-health estimate
//!
//! All three are computed from a single temperature/humidity pair.

use crate::utils::normalization::{clamp_score, round_to};

/// Below this temperature (°C, ~80°F) the heat index equals the air temperature
pub const HEAT_INDEX_THRESHOLD_C: f64 = 27.0;

/// Temperature with full thermal comfort (°C)
pub const COMFORT_OPTIMAL_TEMP_C: f64 = 23.0;

/// Humidity with full thermal comfort (%)
pub const COMFORT_OPTIMAL_HUMIDITY_PCT: f64 = 50.0;

/// Comfort points lost per °C away from the optimum
const COMFORT_TEMP_PENALTY: f64 = 10.0;

/// Comfort points lost per % humidity away from the optimum
const COMFORT_HUMIDITY_PENALTY: f64 = 2.0;

/// Temperature at which lake health equals humidity (°C)
const LAKE_REFERENCE_TEMP_C: f64 = 30.0;

/// Perceived temperature from air temperature and relative humidity.
///
/// Below 27°C the temperature is returned unchanged. Above it, the
/// nine-term Steadman-style regression (Celsius coefficients) is applied:
///
/// HI = c1 + c2·T + c3·H + c4·T·H + c5·T² + c6·H² + c7·T²·H + c8·T·H² + c9·T²·H²
///
/// Rounded to 1 decimal place.
pub fn calculate_heat_index(temperature: f64, humidity: f64) -> f64 {
    if temperature < HEAT_INDEX_THRESHOLD_C {
        return temperature;
    }

    let t = temperature;
    let h = humidity;
    let t2 = t * t;
    let h2 = h * h;

    let hi = -8.784695
        + 1.61139411 * t
        + 2.338549 * h
        - 0.14611605 * t * h
        - 0.012308094 * t2
        - 0.016424828 * h2
        + 0.002211732 * t2 * h
        + 0.00072546 * t * h2
        - 0.000003582 * t2 * h2;

    round_to(hi, 1)
}

/// Thermal comfort on a 0-100 scale.
///
/// - temp_comfort = max(0, 100 - |T - 23| × 10)
/// - humidity_comfort = max(0, 100 - |H - 50| × 2)
/// - result = mean of the two, rounded to 1 decimal
pub fn calculate_comfort_index(temperature: f64, humidity: f64) -> f64 {
    let temp_comfort =
        (100.0 - (temperature - COMFORT_OPTIMAL_TEMP_C).abs() * COMFORT_TEMP_PENALTY).max(0.0);
    let humidity_comfort =
        (100.0 - (humidity - COMFORT_OPTIMAL_HUMIDITY_PCT).abs() * COMFORT_HUMIDITY_PENALTY).max(0.0);

    clamp_score(round_to((temp_comfort + humidity_comfort) / 2.0, 1))
}

/// Rough lake-health estimate from ambient conditions.
///
/// humidity + (30 - T) × 2, clamped to [0, 100].
pub fn estimate_lake_health(temperature: f64, humidity: f64) -> f64 {
    clamp_score(humidity + (LAKE_REFERENCE_TEMP_C - temperature) * 2.0)
}

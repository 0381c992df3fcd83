//! Hot-tub evaporation model.
//!
//! Estimates daily water loss from an outdoor tub from water/air
//! temperatures, humidity, wind, jet agitation, and cover time. The model
//! is a vapor-pressure-deficit formula with multiplicative corrections:
//! saturated vapor pressures come from the Antoine equation, wind thins the
//! humid boundary layer above the surface, and churned water sheds moisture
//! faster than a still surface. Everything here is pure and deterministic.

use std::f64::consts::PI;
use std::ops::RangeInclusive;

/// Antoine equation coefficients for water (pressure in mmHg, temperature
/// in Celsius, valid 1-100 °C): log10(P) = A - B / (C + T).
const ANTOINE_A: f64 = 8.07131;
const ANTOINE_B: f64 = 1730.63;
const ANTOINE_C: f64 = 233.426;

/// Still-air depth loss per mmHg of vapor pressure deficit.
const BASE_RATE_MM_PER_MMHG: f64 = 0.0457;

/// Each m/s of wind adds 9% to the rate by stripping the boundary layer.
const WIND_FACTOR_PER_MPS: f64 = 0.09;

/// Jet-churned water evaporates at roughly twice the still-surface rate
/// (bubbles add surface area, turnover disrupts the boundary layer).
const CHURN_RATE_MULTIPLIER: f64 = 2.0;

/// Industry rule of thumb for uncovered hot-tub depth loss, before the
/// wind/agitation/exposure corrections.
const INDUSTRY_BASE_MM_PER_DAY: f64 = 8.9;

const HOURS_PER_DAY: f64 = 24.0;

/// Plausibility ranges enforced at the prompt; values outside are rejected,
/// never clamped.
pub const DIAMETER_RANGE_M: RangeInclusive<f64> = 0.5..=10.0;
pub const WATER_TEMP_RANGE_C: RangeInclusive<f64> = 1.0..=100.0;
pub const AIR_TEMP_RANGE_C: RangeInclusive<f64> = -40.0..=60.0;
pub const HUMIDITY_RANGE_PCT: RangeInclusive<f64> = 0.0..=100.0;
pub const WIND_RANGE_MPS: RangeInclusive<f64> = 0.0..=40.0;
pub const CHURN_RANGE_PCT: RangeInclusive<f64> = 0.0..=100.0;
pub const UNCOVERED_HOURS_RANGE: RangeInclusive<f64> = 0.0..=24.0;

/// Saturated vapor pressure of water in mmHg via the Antoine equation.
pub fn saturation_vapor_pressure_mmhg(temp_c: f64) -> f64 {
    10f64.powf(ANTOINE_A - ANTOINE_B / (ANTOINE_C + temp_c))
}

/// One scenario: tub geometry plus environmental conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubConditions {
    pub diameter_m: f64,
    pub water_temp_c: f64,
    pub air_temp_c: f64,
    pub relative_humidity_pct: f64,
    pub wind_speed_mps: f64,
    pub churn_area_pct: f64,
    pub uncovered_hours_per_day: f64,
}

impl Default for TubConditions {
    fn default() -> Self {
        Self {
            diameter_m: 2.2,
            water_temp_c: 38.0,
            air_temp_c: 21.0,
            relative_humidity_pct: 35.0,
            wind_speed_mps: 2.0,
            churn_area_pct: 25.0,
            uncovered_hours_per_day: 14.0,
        }
    }
}

impl TubConditions {
    pub fn surface_area_m2(&self) -> f64 {
        let radius = self.diameter_m / 2.0;
        PI * radius * radius
    }
}

/// Full model output, intermediates included so the CLI (and dashboard)
/// can show how the estimate was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaporationEstimate {
    pub water_vp_mmhg: f64,
    pub air_saturation_vp_mmhg: f64,
    pub air_actual_vp_mmhg: f64,
    pub vp_deficit_mmhg: f64,
    pub surface_area_m2: f64,
    pub base_rate_mm_per_day: f64,
    pub wind_multiplier: f64,
    pub agitation_multiplier: f64,
    pub exposure_fraction: f64,
    pub depth_loss_mm_per_day: f64,
    pub volume_loss_l_per_day: f64,
    pub industry_estimate_l_per_day: f64,
}

pub fn estimate(conditions: &TubConditions) -> EvaporationEstimate {
    let water_vp_mmhg = saturation_vapor_pressure_mmhg(conditions.water_temp_c);
    let air_saturation_vp_mmhg = saturation_vapor_pressure_mmhg(conditions.air_temp_c);
    let air_actual_vp_mmhg = air_saturation_vp_mmhg * (conditions.relative_humidity_pct / 100.0);

    // The driving force for evaporation.
    let vp_deficit_mmhg = water_vp_mmhg - air_actual_vp_mmhg;

    let base_rate_mm_per_day = BASE_RATE_MM_PER_MMHG * vp_deficit_mmhg;

    let wind_multiplier = 1.0 + conditions.wind_speed_mps * WIND_FACTOR_PER_MPS;

    // Weighted average over the churned and still portions of the surface.
    let churn_fraction = conditions.churn_area_pct / 100.0;
    let agitation_multiplier =
        (1.0 - churn_fraction) + churn_fraction * CHURN_RATE_MULTIPLIER;

    let exposure_fraction = conditions.uncovered_hours_per_day / HOURS_PER_DAY;

    let depth_loss_mm_per_day =
        base_rate_mm_per_day * wind_multiplier * agitation_multiplier * exposure_fraction;

    let surface_area_m2 = conditions.surface_area_m2();

    // 1 mm of depth over 1 m² is exactly 1 litre.
    let volume_loss_l_per_day = surface_area_m2 * depth_loss_mm_per_day;

    let industry_estimate_l_per_day = INDUSTRY_BASE_MM_PER_DAY
        * wind_multiplier
        * agitation_multiplier
        * exposure_fraction
        * surface_area_m2;

    EvaporationEstimate {
        water_vp_mmhg,
        air_saturation_vp_mmhg,
        air_actual_vp_mmhg,
        vp_deficit_mmhg,
        surface_area_m2,
        base_rate_mm_per_day,
        wind_multiplier,
        agitation_multiplier,
        exposure_fraction,
        depth_loss_mm_per_day,
        volume_loss_l_per_day,
        industry_estimate_l_per_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn antoine_matches_boiling_point() {
        // Water boils where its vapor pressure reaches one atmosphere.
        assert!(close(saturation_vapor_pressure_mmhg(100.0), 760.086369));
    }

    #[test]
    fn antoine_reference_points() {
        assert!(close(saturation_vapor_pressure_mmhg(38.0), 49.572901));
        assert!(close(saturation_vapor_pressure_mmhg(25.0), 23.686414));
    }

    #[test]
    fn still_uncovered_tub_estimate() {
        // Water 38 °C, air 25 °C, RH 50%, wind 2 m/s, no jets, uncovered all day.
        let conditions = TubConditions {
            air_temp_c: 25.0,
            relative_humidity_pct: 50.0,
            churn_area_pct: 0.0,
            uncovered_hours_per_day: 24.0,
            ..TubConditions::default()
        };

        let est = estimate(&conditions);

        assert!(close(est.vp_deficit_mmhg, 37.729694));
        assert!(close(est.wind_multiplier, 1.18));
        assert!(close(est.agitation_multiplier, 1.0));
        assert!(close(est.exposure_fraction, 1.0));
        assert!(close(est.depth_loss_mm_per_day, 2.034611));
        assert!(close(est.volume_loss_l_per_day, 7.734224));
    }

    #[test]
    fn default_conditions_estimate() {
        let est = estimate(&TubConditions::default());

        assert!(close(est.surface_area_m2, 3.801327));
        assert!(close(est.agitation_multiplier, 1.25));
        assert!(close(est.exposure_fraction, 14.0 / 24.0));
        assert!(close(est.depth_loss_mm_per_day, 1.693454));
        assert!(close(est.volume_loss_l_per_day, 6.437373));
        assert!(close(est.industry_estimate_l_per_day, 29.109454));
    }

    #[test]
    fn estimate_is_deterministic() {
        let conditions = TubConditions::default();
        assert_eq!(estimate(&conditions), estimate(&conditions));
    }

    #[test]
    fn no_wind_no_jets_leaves_base_rate_untouched() {
        let conditions = TubConditions {
            wind_speed_mps: 0.0,
            churn_area_pct: 0.0,
            uncovered_hours_per_day: 24.0,
            ..TubConditions::default()
        };

        let est = estimate(&conditions);
        assert!(close(est.wind_multiplier, 1.0));
        assert!(close(est.agitation_multiplier, 1.0));
        assert!(close(est.depth_loss_mm_per_day, est.base_rate_mm_per_day));
    }

    #[test]
    fn covered_all_day_loses_nothing() {
        let conditions = TubConditions {
            uncovered_hours_per_day: 0.0,
            ..TubConditions::default()
        };

        let est = estimate(&conditions);
        assert_eq!(est.depth_loss_mm_per_day, 0.0);
        assert_eq!(est.volume_loss_l_per_day, 0.0);
    }

    #[test]
    fn higher_water_temperature_means_more_loss() {
        let cool = estimate(&TubConditions { water_temp_c: 35.0, ..TubConditions::default() });
        let hot = estimate(&TubConditions { water_temp_c: 40.0, ..TubConditions::default() });

        assert!(hot.volume_loss_l_per_day > cool.volume_loss_l_per_day);
    }

    #[test]
    fn full_churn_doubles_the_agitation_multiplier() {
        let est = estimate(&TubConditions { churn_area_pct: 100.0, ..TubConditions::default() });
        assert!(close(est.agitation_multiplier, CHURN_RATE_MULTIPLIER));
    }
}

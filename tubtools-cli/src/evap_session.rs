//! Interactive session for the hot-tub evaporation calculator: prompt for
//! each parameter (empty input takes the default), run the pure model, and
//! print the estimate with its intermediate factors.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tubtools_core::evaporation::{
    self, AIR_TEMP_RANGE_C, CHURN_RANGE_PCT, DIAMETER_RANGE_M, EvaporationEstimate,
    HUMIDITY_RANGE_PCT, TubConditions, UNCOVERED_HOURS_RANGE, WATER_TEMP_RANGE_C, WIND_RANGE_MPS,
};

use crate::prompt;

const BANNER_WIDTH: usize = 60;

pub fn run(defaults: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let conditions = if defaults {
        TubConditions::default()
    } else {
        write!(out, "{}", header())?;
        prompt_conditions(&mut input, &mut out)?
    };

    let est = evaporation::estimate(&conditions);
    write!(out, "{}", render_results(&conditions, &est))?;

    Ok(())
}

fn header() -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\nHOT TUB EVAPORATION CALCULATOR\n{rule}\n")
}

fn prompt_conditions<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<TubConditions> {
    let d = TubConditions::default();

    writeln!(out, "\n--- Hot Tub Specifications ---")?;
    let diameter_m =
        prompt::prompt_f64(input, out, "Tub diameter (m)", d.diameter_m, &DIAMETER_RANGE_M)?;
    let water_temp_c = prompt::prompt_f64(
        input,
        out,
        "Water temperature (°C)",
        d.water_temp_c,
        &WATER_TEMP_RANGE_C,
    )?;
    let uncovered_hours_per_day = prompt::prompt_f64(
        input,
        out,
        "Hours uncovered per day",
        d.uncovered_hours_per_day,
        &UNCOVERED_HOURS_RANGE,
    )?;

    writeln!(out, "\n--- Environmental Conditions ---")?;
    let air_temp_c = prompt::prompt_f64(
        input,
        out,
        "Average air temperature (°C)",
        d.air_temp_c,
        &AIR_TEMP_RANGE_C,
    )?;
    let relative_humidity_pct = prompt::prompt_f64(
        input,
        out,
        "Relative humidity (%)",
        d.relative_humidity_pct,
        &HUMIDITY_RANGE_PCT,
    )?;
    let wind_speed_mps = prompt::prompt_f64(
        input,
        out,
        "Average wind speed (m/s)",
        d.wind_speed_mps,
        &WIND_RANGE_MPS,
    )?;

    writeln!(out, "\n--- Jets/Agitation ---")?;
    let churn_area_pct = prompt::prompt_f64(
        input,
        out,
        "Share of surface churned by jets (%)",
        d.churn_area_pct,
        &CHURN_RANGE_PCT,
    )?;

    Ok(TubConditions {
        diameter_m,
        water_temp_c,
        air_temp_c,
        relative_humidity_pct,
        wind_speed_mps,
        churn_area_pct,
        uncovered_hours_per_day,
    })
}

/// Pure rendering of the model output, intermediates included for
/// transparency.
fn render_results(conditions: &TubConditions, est: &EvaporationEstimate) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    out.push_str("\n--- Calculated Surface Area ---\n");
    out.push_str(&format!("Surface area: {:.1} square metres\n", est.surface_area_m2));

    out.push_str("\n--- Vapor Pressure Analysis ---\n");
    out.push_str(&format!(
        "Saturated VP at water surface ({}°C): {:.1} mmHg\n",
        conditions.water_temp_c, est.water_vp_mmhg
    ));
    out.push_str(&format!(
        "Saturated VP in air ({}°C): {:.1} mmHg\n",
        conditions.air_temp_c, est.air_saturation_vp_mmhg
    ));
    out.push_str(&format!(
        "Actual VP in air ({}% RH): {:.1} mmHg\n",
        conditions.relative_humidity_pct, est.air_actual_vp_mmhg
    ));
    out.push_str(&format!("Vapor pressure deficit: {:.1} mmHg\n", est.vp_deficit_mmhg));

    out.push_str(&format!("\n{rule}\nEVAPORATION MODEL RESULTS\n{rule}\n"));

    out.push_str("\n--- Multipliers ---\n");
    out.push_str(&format!("Wind multiplier: {:.2}x\n", est.wind_multiplier));
    out.push_str(&format!("Agitation multiplier: {:.2}x\n", est.agitation_multiplier));
    out.push_str(&format!(
        "Exposure time factor: {:.2}x ({} hrs/day)\n",
        est.exposure_fraction, conditions.uncovered_hours_per_day
    ));

    out.push_str("\n--- Water Loss Estimates ---\n");
    out.push_str(&format!("Base evaporation rate: {:.3} mm/day\n", est.base_rate_mm_per_day));
    out.push_str(&format!("Actual depth loss: {:.3} mm/day\n", est.depth_loss_mm_per_day));
    out.push_str(&format!(
        "\nESTIMATED DAILY WATER LOSS: {:.1} litres/day\n",
        est.volume_loss_l_per_day
    ));
    out.push_str(&format!(
        "   (Industry rule-of-thumb estimate: {:.1} litres/day)\n",
        est.industry_estimate_l_per_day
    ));

    out.push_str("\n--- Additional Insights ---\n");
    out.push_str(&format!(
        "Weekly water loss: ~{:.0} litres\n",
        est.volume_loss_l_per_day * 7.0
    ));
    out.push_str(&format!(
        "Monthly water loss: ~{:.0} litres\n",
        est.volume_loss_l_per_day * 30.0
    ));
    if est.depth_loss_mm_per_day > 0.0 {
        out.push_str(&format!(
            "Water level drops {:.3} mm per day ({:.1} days per 10 mm)\n",
            est.depth_loss_mm_per_day,
            10.0 / est.depth_loss_mm_per_day
        ));
    } else {
        out.push_str("Water level does not measurably drop.\n");
    }

    out.push_str(&format!("\n{rule}\n"));
    out.push_str("SENSITIVITY NOTES:\n");
    out.push_str("- Doubling wind speed increases loss by ~20-40%\n");
    out.push_str("- Each 5°C increase in water temperature adds ~15-25% loss\n");
    out.push_str("- Each 10% drop in humidity adds ~10-15% loss\n");
    out.push_str("- Aggressive jets (50% churn) can add 25-50% to loss\n");
    out.push_str(&format!("{rule}\n"));

    out
}

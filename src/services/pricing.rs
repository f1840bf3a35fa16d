use crate::domain::models::{CalculationResult, GlobalConfig, ServiceHours};

/// Baseline cost of one hour of work. A non-positive `reference_hours`
/// yields 0 instead of dividing; this guard is load-bearing and must stay.
pub fn cost_per_hour(config: &GlobalConfig) -> f64 {
    if config.reference_hours > 0.0 {
        config.reference_cost / config.reference_hours
    } else {
        0.0
    }
}

/// Derives a full quote from the configuration and the selected services.
/// Pure: identical inputs always produce identical results, and every call
/// recomputes the whole record from scratch.
pub fn compute(config: &GlobalConfig, selection: &[ServiceHours]) -> CalculationResult {
    let total_hours: f64 = selection.iter().map(|s| s.hours).sum();
    let cost_per_hour = cost_per_hour(config);
    let gross_cost = total_hours * cost_per_hour;

    let margin_value = gross_cost * (config.margin_percent / 100.0);
    let value_with_margin = gross_cost + margin_value;

    let tax_value = value_with_margin * (config.tax_percent / 100.0);
    let final_price = value_with_margin + tax_value;

    CalculationResult {
        total_hours,
        cost_per_hour,
        gross_cost,
        margin_value,
        value_with_margin,
        tax_value,
        final_price,
    }
}

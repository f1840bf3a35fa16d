use crate::domain::models::{CalculationResult, DisplaySettings, GlobalConfig, ServiceHours};
use std::fmt::Write;

pub fn money(settings: &DisplaySettings, value: f64) -> String {
    format!("{} {:.*}", settings.currency, settings.decimals, value)
}

/// Plain-text rendering of a quote, shared by `show`, `history show` and
/// `history export`. The format is presentational and not a stable contract.
pub fn render_summary(
    config: &GlobalConfig,
    services: &[ServiceHours],
    results: &CalculationResult,
    settings: &DisplaySettings,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "services:");
    if services.is_empty() {
        let _ = writeln!(out, "  (none selected)");
    }
    for s in services {
        let _ = writeln!(out, "  {}  {}h", s.name, s.hours);
    }
    let _ = writeln!(out, "total hours: {}h", results.total_hours);
    let _ = writeln!(
        out,
        "cost per hour: {}",
        money(settings, results.cost_per_hour)
    );
    let _ = writeln!(out, "gross cost: {}", money(settings, results.gross_cost));
    let _ = writeln!(
        out,
        "margin ({}%): {}",
        config.margin_percent,
        money(settings, results.margin_value)
    );
    let _ = writeln!(
        out,
        "tax ({}%): {}",
        config.tax_percent,
        money(settings, results.tax_value)
    );
    let _ = writeln!(out, "final price: {}", money(settings, results.final_price));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pricing::compute;

    #[test]
    fn summary_lists_services_and_final_price() {
        let config = GlobalConfig::default();
        let services = vec![ServiceHours {
            name: "Landing Page Simples".to_string(),
            hours: 8.0,
        }];
        let results = compute(&config, &services);
        let text = render_summary(&config, &services, &results, &DisplaySettings::default());
        assert!(text.contains("Landing Page Simples  8h"));
        assert!(text.contains("total hours: 8h"));
        assert!(text.contains("final price: R$"));
    }

    #[test]
    fn empty_selection_is_called_out() {
        let config = GlobalConfig::default();
        let results = compute(&config, &[]);
        let text = render_summary(&config, &[], &results, &DisplaySettings::default());
        assert!(text.contains("(none selected)"));
        assert!(text.contains("final price: R$ 0.00"));
    }
}
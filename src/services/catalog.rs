use crate::domain::constants::DEFAULT_SERVICES;
use crate::domain::models::{ServiceHours, ServiceItem};
use crate::services::output::CodedError;

pub fn default_catalog() -> Vec<ServiceItem> {
    DEFAULT_SERVICES
        .iter()
        .map(|(id, name, hours)| ServiceItem {
            id: (*id).to_string(),
            name: (*name).to_string(),
            default_hours: *hours,
            current_hours: *hours,
            is_selected: false,
            is_custom: false,
        })
        .collect()
}

/// Services are addressed by id or exact name on the command line.
fn find_mut<'a>(services: &'a mut [ServiceItem], key: &str) -> anyhow::Result<&'a mut ServiceItem> {
    services
        .iter_mut()
        .find(|s| s.id == key || s.name == key)
        .ok_or_else(|| CodedError::new("UNKNOWN_SERVICE", format!("unknown service: {}", key)))
}

pub fn set_selected<'a>(
    services: &'a mut [ServiceItem],
    key: &str,
    selected: bool,
) -> anyhow::Result<&'a ServiceItem> {
    let item = find_mut(services, key)?;
    item.is_selected = selected;
    Ok(item)
}

pub fn set_hours<'a>(
    services: &'a mut [ServiceItem],
    key: &str,
    hours: f64,
) -> anyhow::Result<&'a ServiceItem> {
    validate_hours(hours)?;
    let item = find_mut(services, key)?;
    item.current_hours = hours;
    Ok(item)
}

/// Custom services join the worksheet already selected.
pub fn add_custom(
    services: &mut Vec<ServiceItem>,
    name: &str,
    hours: f64,
) -> anyhow::Result<ServiceItem> {
    validate_hours(hours)?;
    if name.trim().is_empty() {
        return Err(CodedError::new("INVALID_SERVICE", "service name is empty"));
    }
    let item = ServiceItem {
        id: format!("custom_{}", chrono::Local::now().timestamp_millis()),
        name: name.to_string(),
        default_hours: hours,
        current_hours: hours,
        is_selected: true,
        is_custom: true,
    };
    services.push(item.clone());
    Ok(item)
}

/// Only custom entries can be removed; the built-in catalog is fixed.
pub fn remove_custom(services: &mut Vec<ServiceItem>, key: &str) -> anyhow::Result<ServiceItem> {
    let item = find_mut(services, key)?.clone();
    if !item.is_custom {
        return Err(CodedError::new(
            "NOT_CUSTOM",
            format!("built-in services cannot be removed: {}", item.name),
        ));
    }
    services.retain(|s| s.id != item.id);
    Ok(item)
}

/// Resolves the worksheet into the (name, hours) pairs a quote is computed
/// from. Unselected services never reach the engine.
pub fn selected_hours(services: &[ServiceItem]) -> Vec<ServiceHours> {
    services
        .iter()
        .filter(|s| s.is_selected)
        .map(|s| ServiceHours {
            name: s.name.clone(),
            hours: s.current_hours,
        })
        .collect()
}

fn validate_hours(hours: f64) -> anyhow::Result<()> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(CodedError::new(
            "INVALID_HOURS",
            format!("hours must be a positive number, got {}", hours),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_matches_builtin_list() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), DEFAULT_SERVICES.len());
        assert!(catalog.iter().all(|s| !s.is_selected && !s.is_custom));
        assert!(catalog.iter().all(|s| s.current_hours == s.default_hours));
    }

    #[test]
    fn selection_filters_into_engine_input() {
        let mut catalog = default_catalog();
        set_selected(&mut catalog, "servico_lp", true).unwrap();
        set_hours(&mut catalog, "servico_lp", 10.5).unwrap();
        let selection = selected_hours(&catalog);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection[0].name, "Landing Page Simples");
        assert_eq!(selection[0].hours, 10.5);
    }

    #[test]
    fn services_resolve_by_name_too() {
        let mut catalog = default_catalog();
        set_selected(&mut catalog, "Google My Business", true).unwrap();
        assert!(catalog.iter().any(|s| s.id == "servico_gmb" && s.is_selected));
        assert!(set_selected(&mut catalog, "no-such-service", true).is_err());
    }

    #[test]
    fn hours_must_be_positive_and_finite() {
        let mut catalog = default_catalog();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(set_hours(&mut catalog, "servico_lp", bad).is_err());
        }
        assert!(set_hours(&mut catalog, "servico_lp", 0.5).is_ok());
    }

    #[test]
    fn custom_services_are_selected_on_add_and_removable() {
        let mut catalog = default_catalog();
        let added = add_custom(&mut catalog, "Integração API", 6.0).unwrap();
        assert!(added.is_selected && added.is_custom);
        assert!(added.id.starts_with("custom_"));

        let removed = remove_custom(&mut catalog, "Integração API").unwrap();
        assert_eq!(removed.id, added.id);
        assert_eq!(catalog.len(), DEFAULT_SERVICES.len());
    }

    #[test]
    fn builtin_services_cannot_be_removed() {
        let mut catalog = default_catalog();
        let err = remove_custom(&mut catalog, "servico_lp").unwrap_err();
        assert!(err.to_string().contains("cannot be removed"));
        assert_eq!(catalog.len(), DEFAULT_SERVICES.len());
    }
}

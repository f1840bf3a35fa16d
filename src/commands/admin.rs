use crate::*;

pub fn handle_config_commands(cli: &Cli, config: &mut GlobalConfig) -> anyhow::Result<bool> {
    let Commands::Config { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ConfigCommands::Show => {
            let report = ConfigReport {
                config: config.clone(),
                cost_per_hour: cost_per_hour(config),
            };
            let settings = load_settings()?;
            print_one(cli.json, report, |r| {
                format!(
                    "reference hours: {}h\nreference cost: {}\nmargin: {}%\ntax: {}%\ncost per hour: {}",
                    r.config.reference_hours,
                    money(&settings, r.config.reference_cost),
                    r.config.margin_percent,
                    r.config.tax_percent,
                    money(&settings, r.cost_per_hour)
                )
            })?;
        }
        ConfigCommands::Set {
            reference_hours,
            reference_cost,
            margin,
            tax,
        } => {
            if let Some(h) = reference_hours {
                // Zero and negative values are accepted as degenerate input;
                // the engine resolves them to a zero cost per hour.
                require_finite("reference-hours", *h)?;
                config.reference_hours = *h;
            }
            if let Some(c) = reference_cost {
                require_non_negative("reference-cost", *c)?;
                config.reference_cost = *c;
            }
            if let Some(m) = margin {
                require_non_negative("margin", *m)?;
                config.margin_percent = *m;
            }
            if let Some(t) = tax {
                require_non_negative("tax", *t)?;
                config.tax_percent = *t;
            }
            save_config(config)?;
            audit("config_set", serde_json::to_value(&config)?);
            let report = ConfigReport {
                config: config.clone(),
                cost_per_hour: cost_per_hour(config),
            };
            print_one(cli.json, report, |_| "configuration saved".to_string())?;
        }
        ConfigCommands::Reset => {
            *config = GlobalConfig::default();
            save_config(config)?;
            audit("config_reset", serde_json::json!({}));
            print_one(cli.json, config.clone(), |_| {
                "configuration reset to defaults".to_string()
            })?;
        }
    }

    Ok(true)
}

pub fn handle_service_commands(
    cli: &Cli,
    services: &mut Vec<ServiceItem>,
) -> anyhow::Result<bool> {
    let Commands::Service { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ServiceCommands::List => {
            print_out(cli.json, services, |s| {
                format!(
                    "{}\t{}\t{}h\t{}{}",
                    s.id,
                    s.name,
                    s.current_hours,
                    if s.is_selected { "selected" } else { "-" },
                    if s.is_custom { "\tcustom" } else { "" }
                )
            })?;
        }
        ServiceCommands::Add { name, hours } => {
            let item = add_custom(services, name, *hours)?;
            save_services(services)?;
            audit(
                "service_add",
                serde_json::json!({"id": item.id, "name": item.name}),
            );
            print_one(cli.json, item, |s| {
                format!("added {} ({}h, selected)", s.name, s.current_hours)
            })?;
        }
        ServiceCommands::Remove { name } => {
            let item = remove_custom(services, name)?;
            save_services(services)?;
            audit(
                "service_remove",
                serde_json::json!({"id": item.id, "name": item.name}),
            );
            print_one(cli.json, item, |s| format!("removed {}", s.name))?;
        }
        ServiceCommands::Reset => {
            *services = default_catalog();
            save_services(services)?;
            audit("service_reset", serde_json::json!({}));
            print_one(cli.json, services.len(), |c| {
                format!("catalog reset ({} built-in services)", c)
            })?;
        }
    }

    Ok(true)
}

fn require_finite(field: &str, value: f64) -> anyhow::Result<()> {
    if !value.is_finite() {
        return Err(CodedError::new(
            "INVALID_CONFIG",
            format!("{} must be a finite number", field),
        ));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> anyhow::Result<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CodedError::new(
            "INVALID_CONFIG",
            format!("{} must not be negative, got {}", field, value),
        ));
    }
    Ok(())
}

use crate::*;

pub fn handle_runtime_commands(
    cli: &Cli,
    config: &GlobalConfig,
    services: &mut Vec<ServiceItem>,
) -> anyhow::Result<()> {
    let settings = load_settings()?;

    match &cli.command {
        Commands::Show => {
            let selection = selected_hours(services);
            let results = compute(config, &selection);
            if cli.json {
                let report = QuoteReport {
                    config: config.clone(),
                    services: selection,
                    results,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                print!(
                    "{}",
                    render_summary(config, &selection, &results, &settings)
                );
            }
        }
        Commands::Select { service } => {
            let item = set_selected(services, service, true)?.clone();
            save_services(services)?;
            print_one(cli.json, item, |s| {
                format!("selected {} ({}h)", s.name, s.current_hours)
            })?;
        }
        Commands::Deselect { service } => {
            let item = set_selected(services, service, false)?.clone();
            save_services(services)?;
            print_one(cli.json, item, |s| format!("deselected {}", s.name))?;
        }
        Commands::Hours { service, hours } => {
            let item = set_hours(services, service, *hours)?.clone();
            save_services(services)?;
            print_one(cli.json, item, |s| {
                format!("set {} to {}h", s.name, s.current_hours)
            })?;
        }
        Commands::Save => {
            let selection = selected_hours(services);
            let results = compute(config, &selection);
            if results.total_hours <= 0.0 {
                return Err(CodedError::new(
                    "EMPTY_SELECTION",
                    "no hours selected; nothing to save",
                ));
            }
            let entry = ledger::new_entry(config, selection, results);
            let history = load_history()?;
            let next = ledger::prepend(entry.clone(), &history);
            save_history(&next)?;
            audit(
                "save",
                serde_json::json!({"id": entry.id, "finalPrice": entry.results.final_price}),
            );
            print_one(cli.json, entry, |e| {
                format!(
                    "saved quote #{} (final price {})",
                    ledger::short_id(&e.id),
                    money(&settings, e.results.final_price)
                )
            })?;
        }
        Commands::History { command } => {
            handle_history_commands(cli, command, &settings)?;
        }
        Commands::Config { .. } | Commands::Service { .. } => {
            unreachable!("handled before runtime dispatch")
        }
    }

    Ok(())
}

fn handle_history_commands(
    cli: &Cli,
    command: &HistoryCommands,
    settings: &DisplaySettings,
) -> anyhow::Result<()> {
    match command {
        HistoryCommands::List => {
            let history = load_history()?;
            let rows: Vec<HistoryRow> = history
                .iter()
                .map(|e| HistoryRow {
                    id: e.id.clone(),
                    date_str: e.date_str.clone(),
                    service_count: e.services.len(),
                    total_hours: e.results.total_hours,
                    margin_percent: e.config.margin_percent,
                    tax_percent: e.config.tax_percent,
                    final_price: e.results.final_price,
                })
                .collect();
            print_out(cli.json, &rows, |r| {
                format!(
                    "#{}\t{}\t{} services\t{}h\t{}",
                    ledger::short_id(&r.id),
                    r.date_str,
                    r.service_count,
                    r.total_hours,
                    money(settings, r.final_price)
                )
            })?;
        }
        HistoryCommands::Show { id } => {
            let history = load_history()?;
            let entry = ledger::find(&history, id)?.clone();
            print_one(cli.json, entry, |e| {
                format!(
                    "saved {} (id {})\n{}",
                    e.date_str,
                    e.id,
                    render_summary(&e.config, &e.services, &e.results, settings)
                )
            })?;
        }
        HistoryCommands::Export { id, out } => {
            let history = load_history()?;
            let entry = ledger::find(&history, id)?;
            let text = format!(
                "quote {} (id {})\n{}",
                entry.date_str,
                entry.id,
                render_summary(&entry.config, &entry.services, &entry.results, settings)
            );
            match out {
                Some(path) => {
                    std::fs::write(path, &text)?;
                    let report = ExportReport {
                        id: entry.id.clone(),
                        path: path.to_string_lossy().to_string(),
                    };
                    print_one(cli.json, report, |r| {
                        format!("exported #{} to {}", ledger::short_id(&r.id), r.path)
                    })?;
                }
                None => {
                    if cli.json {
                        let data = serde_json::json!({"id": entry.id, "text": text});
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
                        );
                    } else {
                        print!("{}", text);
                    }
                }
            }
        }
        HistoryCommands::Clear => {
            let removed = load_history()?.len();
            save_history(&ledger::clear())?;
            audit("history_clear", serde_json::json!({"removed": removed}));
            print_one(cli.json, removed, |c| format!("cleared {} entries", c))?;
        }
    }

    Ok(())
}

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Global pricing configuration. Wire names (`hRef`, `cRef`, `me`, `ti`)
/// are the persisted record layout and must stay stable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GlobalConfig {
    #[serde(rename = "hRef")]
    pub reference_hours: f64,
    #[serde(rename = "cRef")]
    pub reference_cost: f64,
    #[serde(rename = "me")]
    pub margin_percent: f64,
    #[serde(rename = "ti")]
    pub tax_percent: f64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            reference_hours: 7.0,
            reference_cost: 150.0,
            margin_percent: 10.0,
            tax_percent: 0.0,
        }
    }
}

/// One catalog entry of the persisted worksheet: built-in services carry a
/// default, custom services are user-created and removable.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: String,
    pub name: String,
    pub default_hours: f64,
    pub current_hours: f64,
    pub is_selected: bool,
    pub is_custom: bool,
}

/// The (name, hours) pair a quote is computed from. Selection flags are
/// resolved by the caller before this type is built.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServiceHours {
    pub name: String,
    pub hours: f64,
}

/// Fully derived quote record. Produced fresh on every computation and
/// never partially updated.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_hours: f64,
    pub cost_per_hour: f64,
    pub gross_cost: f64,
    pub margin_value: f64,
    pub value_with_margin: f64,
    pub tax_value: f64,
    pub final_price: f64,
}

/// Immutable snapshot of a saved quote.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: i64,
    pub date_str: String,
    pub config: GlobalConfig,
    pub services: Vec<ServiceHours>,
    pub results: CalculationResult,
}

#[derive(Debug, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_decimals() -> usize {
    2
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            decimals: default_decimals(),
        }
    }
}

#[derive(Serialize)]
pub struct QuoteReport {
    pub config: GlobalConfig,
    pub services: Vec<ServiceHours>,
    pub results: CalculationResult,
}

#[derive(Serialize)]
pub struct ConfigReport {
    pub config: GlobalConfig,
    #[serde(rename = "costPerHour")]
    pub cost_per_hour: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub id: String,
    pub date_str: String,
    pub service_count: usize,
    pub total_hours: f64,
    #[serde(rename = "me")]
    pub margin_percent: f64,
    #[serde(rename = "ti")]
    pub tax_percent: f64,
    pub final_price: f64,
}

#[derive(Serialize)]
pub struct ExportReport {
    pub id: String,
    pub path: String,
}

use crate::domain::models::JsonOut;
use serde::Serialize;

/// Failure with a stable machine-readable code for the `--json` envelope.
#[derive(Debug)]
pub struct CodedError {
    pub code: &'static str,
    pub message: String,
}

impl CodedError {
    pub fn new(code: &'static str, message: impl Into<String>) -> anyhow::Error {
        anyhow::Error::new(Self {
            code,
            message: message.into(),
        })
    }
}

impl std::fmt::Display for CodedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CodedError {}

pub fn emit_error(json: bool, err: &anyhow::Error) {
    let (code, message) = match err.downcast_ref::<CodedError>() {
        Some(coded) => (coded.code, coded.message.clone()),
        None => ("INTERNAL", format!("{:#}", err)),
    };
    if json {
        println!(
            "{}",
            serde_json::json!({"ok": false, "error": {"code": code, "message": message}})
        );
    } else {
        eprintln!("error: {}", message);
    }
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

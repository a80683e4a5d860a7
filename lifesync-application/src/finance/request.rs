use lifesync_domain::outcome::ErrorList;
use rust_decimal::Decimal;
use serde::Deserialize;

const MAX_DESCRIPTION_LEN: usize = 200;
const MAX_DISPLAY_NAME_LEN: usize = 100;

/// 新增收入/支出请求
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
}

impl TransactionRequest {
    /// 一次性收集全部校验错误（按字段顺序）
    pub fn validate(&self) -> Result<(), ErrorList> {
        let mut errors = None;

        if self.amount <= Decimal::ZERO {
            reject(&mut errors, "Amount must be greater than zero");
        }
        if self.amount.scale() > 2 {
            reject(&mut errors, "Amount must have at most 2 decimal places");
        }
        if !is_currency_code(&self.currency) {
            reject(&mut errors, "Currency must be a 3-letter ISO code");
        }
        check_text(
            &mut errors,
            &self.description,
            "Description",
            MAX_DESCRIPTION_LEN,
        );

        errors.map_or(Ok(()), Err)
    }
}

/// 开立账本请求
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenLedgerRequest {
    pub display_name: String,
    pub currency: String,
}

impl OpenLedgerRequest {
    pub fn validate(&self) -> Result<(), ErrorList> {
        let mut errors = None;

        check_text(
            &mut errors,
            &self.display_name,
            "Display name",
            MAX_DISPLAY_NAME_LEN,
        );
        if !is_currency_code(&self.currency) {
            reject(&mut errors, "Currency must be a 3-letter ISO code");
        }

        errors.map_or(Ok(()), Err)
    }
}

fn reject(errors: &mut Option<ErrorList>, message: impl Into<String>) {
    match errors {
        Some(list) => list.push(message),
        None => *errors = Some(ErrorList::new(message)),
    }
}

fn check_text(errors: &mut Option<ErrorList>, value: &str, field: &str, max_len: usize) {
    if value.trim().is_empty() {
        reject(errors, format!("{field} is required"));
    } else if value.chars().count() > max_len {
        reject(errors, format!("{field} must be at most {max_len} characters"));
    }
}

fn is_currency_code(value: &str) -> bool {
    value.len() == 3 && value.chars().all(|c| c.is_ascii_uppercase())
}

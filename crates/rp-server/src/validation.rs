//! Boundary checks applied before a receipt reaches the store.

use chrono::{NaiveDate, NaiveTime};
use rp_scoring::{DATE_FORMAT, TIME_FORMAT};
use rp_types::Receipt;
use rust_decimal::Decimal;

use crate::dto::ReceiptRequest;
use crate::error::{ServerError, ServerResult};

/// Check presence and format of every field and build the domain receipt.
pub fn validate_receipt(request: ReceiptRequest) -> ServerResult<Receipt> {
    let required = [
        &request.retailer,
        &request.purchase_date,
        &request.purchase_time,
        &request.total,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(invalid("missing required receipt fields"));
    }

    if !has_shape(&request.purchase_date, "dddd-dd-dd")
        || NaiveDate::parse_from_str(&request.purchase_date, DATE_FORMAT).is_err()
    {
        return Err(invalid("invalid purchase date format, expected YYYY-MM-DD"));
    }
    if !has_shape(&request.purchase_time, "dd:dd")
        || NaiveTime::parse_from_str(&request.purchase_time, TIME_FORMAT).is_err()
    {
        return Err(invalid("invalid purchase time format, expected HH:MM"));
    }
    if !is_amount(&request.total) {
        return Err(invalid("invalid total format"));
    }
    for (i, item) in request.items.iter().enumerate() {
        if !is_amount(&item.price) {
            return Err(ServerError::Validation(format!(
                "invalid price format for item {i}"
            )));
        }
    }

    Ok(Receipt {
        retailer: request.retailer,
        purchase_date: request.purchase_date,
        purchase_time: request.purchase_time,
        items: request.items,
        total: request.total,
    })
}

/// A non-negative decimal such as `6`, `6.4` or `6.49`.
fn is_amount(raw: &str) -> bool {
    let well_formed = !raw.is_empty()
        && raw.chars().all(|c| c.is_ascii_digit() || c == '.')
        && raw.chars().filter(|c| *c == '.').count() <= 1
        && !raw.starts_with('.')
        && !raw.ends_with('.');
    well_formed && raw.parse::<Decimal>().is_ok()
}

/// Fixed-width layout check. Each `d` in `shape` matches one ASCII digit and
/// every other byte must match itself. chrono alone accepts unpadded fields
/// and signed years.
fn has_shape(raw: &str, shape: &str) -> bool {
    raw.len() == shape.len()
        && raw.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'd' => c.is_ascii_digit(),
            _ => c == s,
        })
}

fn invalid(message: &str) -> ServerError {
    ServerError::Validation(message.to_string())
}

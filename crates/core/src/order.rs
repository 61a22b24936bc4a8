//! Order data validation.
//!
//! The raw payload arrives as a `serde_json::Value` and is checked for shape
//! before any layout work begins. The check is key-presence based: `discount`
//! and `date` must exist as keys even when their value is `null`. Individual
//! line items are deliberately left unvalidated here; a malformed item fails
//! the generation later, during row derivation.

use crate::error::ReceiptDataError;
use serde_json::{Number, Value};

/// Top-level keys every order payload must carry.
pub const REQUIRED_KEYS: [&str; 6] =
    ["lineItemGroups", "customerName", "discount", "totalPrice", "date", "id"];

/// A validated order, immutable for the run.
#[derive(Debug, Clone)]
pub struct OrderData {
    pub customer_name: String,
    pub date: Option<String>,
    pub groups: Vec<LineItemGroup>,
    pub discount: Option<Number>,
    pub tax: Option<Number>,
    pub total_price: Number,
    pub id: String,
}

/// A named cluster of line items rendered together with its own subtotal.
#[derive(Debug, Clone)]
pub struct LineItemGroup {
    pub name: String,
    pub items: Vec<Value>,
}

/// Validates the raw payload and constructs an [`OrderData`].
///
/// Pure check-and-construct; no side effects.
pub fn validate(raw: &Value) -> Result<OrderData, ReceiptDataError> {
    let Some(object) = raw.as_object() else {
        return Err(ReceiptDataError::NotAnObject(json_kind(raw).to_string()));
    };

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ReceiptDataError::MissingKeys { missing, expected: REQUIRED_KEYS.to_vec() });
    }

    let groups = validate_groups(&object["lineItemGroups"])?;

    Ok(OrderData {
        customer_name: text_of(&object["customerName"]),
        date: optional_text(&object["date"]),
        groups,
        discount: optional_amount(&object["discount"], "discount")?,
        tax: object.get("tax").map(|v| optional_amount(v, "tax")).transpose()?.flatten(),
        total_price: required_amount(&object["totalPrice"], "totalPrice")?,
        id: text_of(&object["id"]),
    })
}

fn validate_groups(value: &Value) -> Result<Vec<LineItemGroup>, ReceiptDataError> {
    let Some(entries) = value.as_array() else {
        return Err(ReceiptDataError::InvalidLineItemGroups(json_kind(value).to_string()));
    };

    let mut groups = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(group) = entry.as_object() else {
            return Err(ReceiptDataError::InvalidLineItemGroups(entry.to_string()));
        };
        if !group.contains_key("name") || !group.contains_key("items") {
            return Err(ReceiptDataError::InvalidLineItemGroups(entry.to_string()));
        }
        // Items must be iterable; their internal shape is checked during row
        // derivation, not here.
        let Some(items) = group["items"].as_array() else {
            return Err(ReceiptDataError::InvalidLineItemGroups(entry.to_string()));
        };
        groups.push(LineItemGroup { name: text_of(&group["name"]), items: items.clone() });
    }
    Ok(groups)
}

fn required_amount(value: &Value, field: &'static str) -> Result<Number, ReceiptDataError> {
    match value {
        Value::Number(n) => Ok(n.clone()),
        other => {
            Err(ReceiptDataError::InvalidAmount { field, value: other.to_string() })
        }
    }
}

fn optional_amount(value: &Value, field: &'static str) -> Result<Option<Number>, ReceiptDataError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(Some(n.clone())),
        other => Err(ReceiptDataError::InvalidAmount { field, value: other.to_string() }),
    }
}

fn optional_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(text_of(other)),
    }
}

/// Display text of a scalar: strings unquoted, nulls empty, everything else
/// as JSON.
pub(crate) fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

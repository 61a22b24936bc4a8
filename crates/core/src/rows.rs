//! Derives the flat, ordered sequence of price-table rows from a validated
//! order.
//!
//! Ordering is fixed: per group, a header row, its item rows, then one
//! subtotal row; after all groups, a discount row (when a discount is set),
//! a tax row (when a tax is set), and always a final total row.

use crate::error::ReceiptDataError;
use crate::money::{format_amount, round2};
use crate::order::{OrderData, text_of};
use serde_json::{Number, Value};

/// One renderable row of the price table, tagged by kind.
///
/// Amount fields are pre-formatted display strings.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRow {
    GroupHeader { name: String },
    Item { name: String, quantity: u64, unit_price: String, line_total: String },
    Subtotal { total: String },
    Discount { amount: String },
    Tax { amount: String },
    Total { amount: String },
}

/// Column labels of the price table's header row.
pub const PRICE_TABLE_LABELS: [&str; 4] = ["Description", "Qty", "Unit Price", "Line Total"];

/// Derives the display rows for an order, in render order.
///
/// Any malformed line item fails the whole derivation; there is no
/// per-row recovery.
pub fn derive_rows(order: &OrderData) -> Result<Vec<DisplayRow>, ReceiptDataError> {
    let mut rows = Vec::new();

    for group in &order.groups {
        rows.push(DisplayRow::GroupHeader { name: group.name.clone() });

        let mut group_total = 0.0_f64;
        for item in &group.items {
            let (name, quantity, price) = decode_item(item)?;
            let unit = price_value(&price)?;
            // The subtotal accumulates unit price, not price * quantity.
            group_total += unit;
            rows.push(DisplayRow::Item {
                name,
                quantity,
                unit_price: format!("${}", price),
                line_total: format!("${}", format_amount(round2(unit * quantity as f64))),
            });
        }

        rows.push(DisplayRow::Subtotal {
            total: format!("${}", format_amount(round2(group_total))),
        });
    }

    if let Some(discount) = &order.discount {
        rows.push(DisplayRow::Discount {
            amount: format!("- ${}", format_amount(round2(price_value(discount)?))),
        });
    }

    // Tax is echoed exactly as given, unrounded.
    if let Some(tax) = &order.tax {
        rows.push(DisplayRow::Tax { amount: format!("${}", tax) });
    }

    rows.push(DisplayRow::Total { amount: format!("${}", order.total_price) });

    Ok(rows)
}

/// Flattens display rows into the text grid the price table draws,
/// label row first.
pub fn rows_to_grid(rows: &[DisplayRow]) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(rows.len() + 1);
    grid.push(PRICE_TABLE_LABELS.iter().map(|label| label.to_string()).collect());

    for row in rows {
        grid.push(match row {
            DisplayRow::GroupHeader { name } => {
                vec![name.clone(), String::new(), String::new(), String::new()]
            }
            DisplayRow::Item { name, quantity, unit_price, line_total } => {
                vec![name.clone(), quantity.to_string(), unit_price.clone(), line_total.clone()]
            }
            DisplayRow::Subtotal { total } => {
                vec![String::new(), String::new(), String::new(), total.clone()]
            }
            DisplayRow::Discount { amount } => {
                vec![String::new(), String::new(), "Discount".to_string(), amount.clone()]
            }
            DisplayRow::Tax { amount } => {
                vec![String::new(), String::new(), "Tax".to_string(), amount.clone()]
            }
            DisplayRow::Total { amount } => {
                vec![String::new(), String::new(), "Total Price".to_string(), amount.clone()]
            }
        });
    }
    grid
}

fn decode_item(item: &Value) -> Result<(String, u64, Number), ReceiptDataError> {
    let Some(object) = item.as_object() else {
        return Err(ReceiptDataError::InvalidItem { field: "entry", value: item.to_string() });
    };

    let name = object.get("name").map(text_of).unwrap_or_default();

    let quantity = match object.get("quantity") {
        Some(Value::Number(n)) => decode_quantity(n)?,
        other => {
            return Err(ReceiptDataError::InvalidItem {
                field: "quantity",
                value: other.map(Value::to_string).unwrap_or_else(|| "missing".to_string()),
            });
        }
    };

    let price = match object.get("price") {
        Some(Value::Number(n)) => n.clone(),
        other => {
            return Err(ReceiptDataError::InvalidItem {
                field: "price",
                value: other.map(Value::to_string).unwrap_or_else(|| "missing".to_string()),
            });
        }
    };

    Ok((name, quantity, price))
}

fn decode_quantity(n: &Number) -> Result<u64, ReceiptDataError> {
    if let Some(q) = n.as_u64() {
        return Ok(q);
    }
    // Accept whole-valued floats like 2.0; reject negatives and fractions.
    match n.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        _ => Err(ReceiptDataError::InvalidItem { field: "quantity", value: n.to_string() }),
    }
}

fn price_value(n: &Number) -> Result<f64, ReceiptDataError> {
    n.as_f64()
        .ok_or_else(|| ReceiptDataError::InvalidAmount { field: "price", value: n.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::validate;

    fn order_from(raw: &str) -> OrderData {
        validate(&serde_json::from_str(raw).unwrap()).unwrap()
    }

    fn widgets_order() -> OrderData {
        order_from(
            r#"{
                "lineItemGroups": [
                    {"name": "Widgets", "items": [{"name": "Widget A", "quantity": 2, "price": 3.5}]}
                ],
                "customerName": "Jane",
                "discount": 1.00,
                "totalPrice": 6.00,
                "date": "2024-01-01 10:00am",
                "id": "42"
            }"#,
        )
    }

    #[test]
    fn derives_reference_rows() {
        let rows = derive_rows(&widgets_order()).unwrap();
        assert_eq!(
            rows,
            vec![
                DisplayRow::GroupHeader { name: "Widgets".to_string() },
                DisplayRow::Item {
                    name: "Widget A".to_string(),
                    quantity: 2,
                    unit_price: "$3.5".to_string(),
                    line_total: "$7.0".to_string(),
                },
                DisplayRow::Subtotal { total: "$3.5".to_string() },
                DisplayRow::Discount { amount: "- $1.0".to_string() },
                DisplayRow::Total { amount: "$6.00".to_string() },
            ]
        );
    }

    #[test]
    fn row_count_matches_group_structure() {
        let order = order_from(
            r#"{
                "lineItemGroups": [
                    {"name": "A", "items": [
                        {"name": "a1", "quantity": 1, "price": 1.0},
                        {"name": "a2", "quantity": 3, "price": 2.25}
                    ]},
                    {"name": "B", "items": [{"name": "b1", "quantity": 1, "price": 4.0}]}
                ],
                "customerName": "Jane",
                "discount": null,
                "tax": 0.5,
                "totalPrice": 10.0,
                "date": null,
                "id": "7"
            }"#,
        );
        let rows = derive_rows(&order).unwrap();
        // (2 + items) per group, plus tax, plus total; no discount row.
        assert_eq!(rows.len(), (2 + 2) + (2 + 1) + 1 + 1);
        assert!(!rows.iter().any(|r| matches!(r, DisplayRow::Discount { .. })));
        assert!(matches!(rows.last(), Some(DisplayRow::Total { .. })));
    }

    #[test]
    fn subtotal_accumulates_unit_prices() {
        let order = order_from(
            r#"{
                "lineItemGroups": [
                    {"name": "Bulk", "items": [{"name": "crate", "quantity": 10, "price": 2.5}]}
                ],
                "customerName": "Jane",
                "discount": null,
                "totalPrice": 25.0,
                "date": null,
                "id": "8"
            }"#,
        );
        let rows = derive_rows(&order).unwrap();
        // Line total is quantity-extended; the subtotal is not.
        assert!(rows.contains(&DisplayRow::Subtotal { total: "$2.5".to_string() }));
        assert!(rows.iter().any(
            |r| matches!(r, DisplayRow::Item { line_total, .. } if line_total == "$25.0")
        ));
    }

    #[test]
    fn empty_group_renders_header_and_zero_subtotal() {
        let order = order_from(
            r#"{
                "lineItemGroups": [{"name": "Empty", "items": []}],
                "customerName": "Jane",
                "discount": null,
                "totalPrice": 0.0,
                "date": null,
                "id": "9"
            }"#,
        );
        let rows = derive_rows(&order).unwrap();
        assert_eq!(
            &rows[..2],
            &[
                DisplayRow::GroupHeader { name: "Empty".to_string() },
                DisplayRow::Subtotal { total: "$0.0".to_string() },
            ]
        );
    }

    #[test]
    fn tax_renders_exactly_as_given() {
        let order = order_from(
            r#"{
                "lineItemGroups": [],
                "customerName": "Jane",
                "discount": 0.125,
                "tax": 0.375,
                "totalPrice": 1.0,
                "date": null,
                "id": "10"
            }"#,
        );
        let rows = derive_rows(&order).unwrap();
        // Discount is rounded, tax is not.
        assert!(rows.contains(&DisplayRow::Discount { amount: "- $0.13".to_string() }));
        assert!(rows.contains(&DisplayRow::Tax { amount: "$0.375".to_string() }));
    }

    #[test]
    fn total_preserves_input_precision() {
        let rows = derive_rows(&widgets_order()).unwrap();
        assert_eq!(rows.last(), Some(&DisplayRow::Total { amount: "$6.00".to_string() }));
    }

    #[test]
    fn non_numeric_price_is_fatal() {
        let order = order_from(
            r#"{
                "lineItemGroups": [
                    {"name": "Bad", "items": [{"name": "x", "quantity": 1, "price": "free"}]}
                ],
                "customerName": "Jane",
                "discount": null,
                "totalPrice": 1.0,
                "date": null,
                "id": "11"
            }"#,
        );
        assert!(matches!(
            derive_rows(&order).unwrap_err(),
            ReceiptDataError::InvalidItem { field: "price", .. }
        ));
    }

    #[test]
    fn missing_quantity_is_fatal() {
        let order = order_from(
            r#"{
                "lineItemGroups": [
                    {"name": "Bad", "items": [{"name": "x", "price": 1.0}]}
                ],
                "customerName": "Jane",
                "discount": null,
                "totalPrice": 1.0,
                "date": null,
                "id": "12"
            }"#,
        );
        assert!(matches!(
            derive_rows(&order).unwrap_err(),
            ReceiptDataError::InvalidItem { field: "quantity", .. }
        ));
    }

    #[test]
    fn negative_quantity_is_fatal() {
        let order = order_from(
            r#"{
                "lineItemGroups": [
                    {"name": "Bad", "items": [{"name": "x", "quantity": -1, "price": 1.0}]}
                ],
                "customerName": "Jane",
                "discount": null,
                "totalPrice": 1.0,
                "date": null,
                "id": "13"
            }"#,
        );
        assert!(matches!(
            derive_rows(&order).unwrap_err(),
            ReceiptDataError::InvalidItem { field: "quantity", .. }
        ));
    }

    #[test]
    fn grid_mirrors_row_order_with_labels_first() {
        let rows = derive_rows(&widgets_order()).unwrap();
        let grid = rows_to_grid(&rows);
        assert_eq!(grid[0], vec!["Description", "Qty", "Unit Price", "Line Total"]);
        assert_eq!(grid[1], vec!["Widgets", "", "", ""]);
        assert_eq!(grid[2], vec!["Widget A", "2", "$3.5", "$7.0"]);
        assert_eq!(grid[3], vec!["", "", "", "$3.5"]);
        assert_eq!(grid[4], vec!["", "", "Discount", "- $1.0"]);
        assert_eq!(grid[5], vec!["", "", "Total Price", "$6.00"]);
    }
}

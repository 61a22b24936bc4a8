mod common;

use common::{order_json, widgets_order};
use good_receipt::{DisplayRow, ReceiptDataError, derive_rows, rows_to_grid, validate};

#[test]
fn derivation_matches_the_worked_example() {
    let order = validate(&widgets_order()).unwrap();
    let rows = derive_rows(&order).unwrap();

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
fn row_count_follows_the_group_structure() {
    let cases = [
        // (groups as (item count), discount, tax)
        (vec![1], true, false),
        (vec![0, 3], false, true),
        (vec![2, 2, 2], true, true),
        (vec![], false, false),
    ];

    for (items_per_group, discount, tax) in cases {
        let groups: Vec<String> = items_per_group
            .iter()
            .enumerate()
            .map(|(g, count)| {
                let items: Vec<String> = (0..*count)
                    .map(|i| format!(r#"{{"name": "item {i}", "quantity": 1, "price": 2.5}}"#))
                    .collect();
                format!(r#"{{"name": "group {g}", "items": [{}]}}"#, items.join(","))
            })
            .collect();
        let raw = order_json(&format!(
            r#"{{
                "lineItemGroups": [{}],
                "customerName": "Jane",
                "discount": {},
                "tax": {},
                "totalPrice": 9.99,
                "date": null,
                "id": "p"
            }}"#,
            groups.join(","),
            if discount { "1.5" } else { "null" },
            if tax { "0.5" } else { "null" },
        ));

        let rows = derive_rows(&validate(&raw).unwrap()).unwrap();
        let expected: usize = items_per_group.iter().map(|count| 2 + count).sum::<usize>()
            + 1
            + usize::from(discount)
            + usize::from(tax);
        assert_eq!(rows.len(), expected, "groups {items_per_group:?}");
        assert!(matches!(rows.last(), Some(DisplayRow::Total { .. })));
    }
}

#[test]
fn missing_keys_fail_regardless_of_other_fields() {
    for key in ["lineItemGroups", "customerName", "discount", "totalPrice", "date", "id"] {
        let mut raw = widgets_order();
        raw.as_object_mut().unwrap().remove(key);
        assert!(
            matches!(validate(&raw), Err(ReceiptDataError::MissingKeys { .. })),
            "expected {key} to be required"
        );
    }
}

#[test]
fn group_lacking_items_is_rejected() {
    let raw = order_json(
        r#"{
            "lineItemGroups": [{"name": "no items here"}],
            "customerName": "Jane",
            "discount": null,
            "totalPrice": 1.0,
            "date": null,
            "id": "x"
        }"#,
    );
    assert!(matches!(validate(&raw), Err(ReceiptDataError::InvalidLineItemGroups(_))));
}

#[test]
fn grid_round_trips_the_derived_amounts() {
    let order = validate(&widgets_order()).unwrap();
    let rows = derive_rows(&order).unwrap();
    let grid = rows_to_grid(&rows);

    // Every dollar amount in the grid parses back to the value it encodes.
    let reparsed: Vec<f64> = grid
        .iter()
        .flatten()
        .filter_map(|cell| cell.strip_prefix("$").or_else(|| cell.strip_prefix("- $")))
        .map(|amount| amount.parse::<f64>().unwrap())
        .collect();
    assert_eq!(reparsed, vec![3.5, 7.0, 3.5, 1.0, 6.0]);
}

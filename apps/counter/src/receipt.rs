//! # Receipt Rendering
//!
//! Plain-text blocks printed by the counter: the menu, the size and add-on
//! pickers, the order summary and the bill.
//!
//! ## Bill Layout
//! ```text
//! --- Order Summary ---
//! Item: Cheese Burst Pizza | Size: Medium | Quantity: 2 | Add-ons: Mushrooms, Onions | Total Price: INR 600.00
//! Item: Veggie Pizza | Size: Small | Quantity: 1 | Add-ons: none | Total Price: INR 150.00
//!
//! --- Bill ---
//! Customer Name: Bob
//! Phone Number: 9876543210
//! Email: bob@example.com
//! Issued: 2026-10-18 12:30:00 UTC
//! Total Amount: INR 750.00
//! ```
//!
//! Every function returns the block as a `String` without a trailing newline.

use std::fmt::Write as _;

use hearth_core::{Bill, Catalog, LineSummary, SizeTier};

use crate::state::CounterConfig;

/// Numbered product list, the exit entry, then the add-on list.
pub fn menu(catalog: &Catalog, config: &CounterConfig) -> String {
    let mut out = String::from("\n--- Menu ---\n");
    for (i, product) in catalog.products().iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} - {}",
            i + 1,
            product.name,
            config.format_amount(product.base_price)
        );
    }
    let _ = writeln!(out, "{}. Exit", config.exit_choice);

    out.push_str("\n--- Available Add-ons ---\n");
    out.push_str(&add_on_list(catalog, config));
    out
}

/// Size picker shown before the size prompt.
pub fn size_menu() -> String {
    let mut out = String::from("Choose a size:");
    for size in SizeTier::ALL {
        let _ = write!(out, "\n{}. {}", size.code(), size.label());
    }
    out
}

/// Add-on picker shown before every add-on round.
pub fn add_on_menu(catalog: &Catalog, config: &CounterConfig) -> String {
    let mut out = String::from("Choose an add-on (or 0 to finish):\n");
    out.push_str(&add_on_list(catalog, config));
    out
}

fn add_on_list(catalog: &Catalog, config: &CounterConfig) -> String {
    catalog
        .add_ons()
        .iter()
        .enumerate()
        .map(|(i, add_on)| format!("{}. {} - {}", i + 1, add_on.name, config.format_amount(add_on.price)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One order summary row.
pub fn summary_row(line: &LineSummary, config: &CounterConfig) -> String {
    let add_ons = if line.add_on_names.is_empty() {
        "none".to_string()
    } else {
        line.add_on_names.join(", ")
    };

    format!(
        "Item: {} | Size: {} | Quantity: {} | Add-ons: {} | Total Price: {}",
        line.product_name,
        line.size_label,
        line.quantity,
        add_ons,
        config.format_amount(line.line_total)
    )
}

/// Order summary followed by the bill footer.
pub fn bill(bill: &Bill, config: &CounterConfig) -> String {
    let mut out = String::from("\n--- Order Summary ---\n");
    for line in &bill.lines {
        out.push_str(&summary_row(line, config));
        out.push('\n');
    }

    let _ = write!(
        out,
        "\n--- Bill ---\n\
         Customer Name: {}\n\
         Phone Number: {}\n\
         Email: {}\n\
         Issued: {}\n\
         Total Amount: {}",
        bill.customer.name(),
        bill.customer.phone(),
        bill.customer.email(),
        bill.issued_at.format("%Y-%m-%d %H:%M:%S UTC"),
        config.format_amount(bill.total)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hearth_core::{Customer, LineItem, OrderLedger, Quantity};

    #[test]
    fn test_menu_lists_products_exit_and_add_ons() {
        let text = menu(&Catalog::reference(), &CounterConfig::default());

        assert!(text.contains("1. Cheese Burst Pizza - INR 250.00"));
        assert!(text.contains("4. Pepperoni Pizza - INR 400.00"));
        assert!(text.contains("6. Exit"));
        assert!(text.contains("--- Available Add-ons ---"));
        assert!(text.contains("5. Bacon - INR 50.00"));
    }

    #[test]
    fn test_size_menu() {
        assert_eq!(size_menu(), "Choose a size:\n1. Small\n2. Medium\n3. Large");
    }

    #[test]
    fn test_summary_row_without_add_ons() {
        let catalog = Catalog::reference();
        let line = LineItem::from_catalog(&catalog, 1, SizeTier::Small, Quantity::new(1).unwrap(), &[])
            .unwrap();

        assert_eq!(
            summary_row(&LineSummary::from(&line), &CounterConfig::default()),
            "Item: Veggie Pizza | Size: Small | Quantity: 1 | Add-ons: none | Total Price: INR 150.00"
        );
    }

    #[test]
    fn test_bill_block() {
        let catalog = Catalog::reference();
        let mut ledger = OrderLedger::default();
        ledger
            .record(
                LineItem::from_catalog(&catalog, 0, SizeTier::Medium, Quantity::new(2).unwrap(), &[0, 1])
                    .unwrap(),
            )
            .unwrap();

        let customer = Customer::new("Bob", "9876543210", "bob@example.com").unwrap();
        let issued = Utc.with_ymd_and_hms(2026, 10, 18, 12, 30, 0).unwrap();
        let bill = ledger.bill(customer, issued).unwrap();

        let text = super::bill(&bill, &CounterConfig::default());
        assert!(text.contains(
            "Item: Cheese Burst Pizza | Size: Medium | Quantity: 2 | Add-ons: Mushrooms, Onions | Total Price: INR 600.00"
        ));
        assert!(text.contains("Customer Name: Bob\nPhone Number: 9876543210\nEmail: bob@example.com"));
        assert!(text.contains("Issued: 2026-10-18 12:30:00 UTC"));
        assert!(text.ends_with("Total Amount: INR 600.00"));
    }
}

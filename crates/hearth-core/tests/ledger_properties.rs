//! Pricing and ledger invariants checked across generated orders, plus the
//! two counter walkthroughs the pricing rules are built around.

use hearth_core::{
    price_line, AddOn, Catalog, CoreError, LineItem, Money, OrderLedger, Product, Quantity,
    SizeTier, MAX_ADD_ONS_PER_LINE, MAX_LINE_QUANTITY, MAX_PRICE_CENTS,
};
use hearth_core::validation::{parse_add_on_choice, parse_menu_choice, parse_quantity, parse_size};
use hearth_core::{AddOnChoice, MenuChoice};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn product() -> impl Strategy<Value = Product> {
    (0i64..=MAX_PRICE_CENTS).prop_map(|cents| Product::new("Generated", Money::from_cents(cents)))
}

fn add_ons() -> impl Strategy<Value = Vec<AddOn>> {
    prop::collection::vec(
        (0i64..=MAX_PRICE_CENTS).prop_map(|cents| AddOn::new("Extra", Money::from_cents(cents))),
        0..=MAX_ADD_ONS_PER_LINE,
    )
}

fn quantity() -> impl Strategy<Value = Quantity> {
    (1u32..=MAX_LINE_QUANTITY).prop_map(|q| Quantity::new(q).unwrap())
}

fn size() -> impl Strategy<Value = SizeTier> {
    prop::sample::select(SizeTier::ALL.to_vec())
}

/// (product index, size, quantity, add-on indices) against the reference catalog.
fn reference_line() -> impl Strategy<Value = (usize, SizeTier, Quantity, Vec<usize>)> {
    (
        0usize..4,
        size(),
        quantity(),
        prop::collection::vec(0usize..5, 0..=MAX_ADD_ONS_PER_LINE),
    )
}

fn build(catalog: &Catalog, shape: &(usize, SizeTier, Quantity, Vec<usize>)) -> LineItem {
    LineItem::from_catalog(catalog, shape.0, shape.1, shape.2, &shape.3).unwrap()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn price_without_add_ons_is_base_times_quantity(p in product(), q in quantity()) {
        let expected = p.base_price.cents() * i64::from(q.get());
        prop_assert_eq!(price_line(&p, q, &[]).cents(), expected);
    }

    #[test]
    fn price_with_add_ons_matches_formula(p in product(), q in quantity(), extras in add_ons()) {
        let add_on_sum: i64 = extras.iter().map(|a| a.price.cents()).sum();
        let expected = (p.base_price.cents() + add_on_sum) * i64::from(q.get());
        prop_assert_eq!(price_line(&p, q, &extras).cents(), expected);
    }

    #[test]
    fn size_never_changes_the_line_total(shape in reference_line()) {
        let catalog = Catalog::reference();
        let totals: Vec<Money> = SizeTier::ALL
            .iter()
            .map(|&s| build(&catalog, &(shape.0, s, shape.2, shape.3.clone())).line_total())
            .collect();
        prop_assert!(totals.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn running_total_equals_sum_of_lines(shapes in prop::collection::vec(reference_line(), 0..30)) {
        let catalog = Catalog::reference();
        let mut ledger = OrderLedger::default();
        let mut expected = Money::zero();

        for shape in &shapes {
            let line = build(&catalog, shape);
            expected += line.line_total();
            ledger.record(line).unwrap();

            let from_items: Money = ledger.items().iter().map(LineItem::line_total).sum();
            prop_assert_eq!(ledger.running_total(), from_items);
        }

        prop_assert_eq!(ledger.running_total(), expected);
        prop_assert_eq!(ledger.running_total(), ledger.running_total());
        prop_assert_eq!(ledger.count(), shapes.len());
    }

    #[test]
    fn recording_order_does_not_change_the_total(
        shapes in prop::collection::vec(reference_line(), 1..20),
        seed in any::<u64>(),
    ) {
        let catalog = Catalog::reference();

        let mut forward = OrderLedger::default();
        for shape in &shapes {
            forward.record(build(&catalog, shape)).unwrap();
        }

        // Deterministic rotation + reversal as the alternative ordering
        let mut shuffled = shapes.clone();
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled.reverse();

        let mut permuted = OrderLedger::default();
        for shape in &shuffled {
            permuted.record(build(&catalog, shape)).unwrap();
        }

        prop_assert_eq!(forward.running_total(), permuted.running_total());
    }

    #[test]
    fn full_ledger_rejects_without_change(
        capacity in 0usize..8,
        extra in reference_line(),
    ) {
        let catalog = Catalog::reference();
        let mut ledger = OrderLedger::with_capacity(capacity);
        for _ in 0..capacity {
            ledger.record(build(&catalog, &(1, SizeTier::Small, Quantity::new(1).unwrap(), vec![]))).unwrap();
        }

        let count = ledger.count();
        let total = ledger.running_total();
        let rejected = ledger.record(build(&catalog, &extra));

        prop_assert!(
            matches!(rejected, Err(CoreError::CapacityExceeded { .. })),
            "expected CapacityExceeded"
        );
        prop_assert_eq!(ledger.count(), count);
        prop_assert_eq!(ledger.running_total(), total);
    }
}

// =============================================================================
// Counter Walkthroughs
// =============================================================================

/// Raw prompt answers for one line: menu, size, quantity, add-on rounds.
fn line_from_answers(catalog: &Catalog, menu: &str, size: &str, qty: &str, rounds: &[&str]) -> LineItem {
    let product = match parse_menu_choice(menu, catalog, 6).unwrap() {
        MenuChoice::Product(index) => index,
        MenuChoice::Exit => panic!("menu answer {menu:?} was the exit sentinel"),
    };

    let mut add_on_indices = Vec::new();
    for round in rounds {
        match parse_add_on_choice(round, catalog).unwrap() {
            AddOnChoice::Select(index) => add_on_indices.push(index),
            AddOnChoice::Finish => break,
        }
    }

    LineItem::from_catalog(
        catalog,
        product,
        parse_size(size).unwrap(),
        parse_quantity(qty).unwrap(),
        &add_on_indices,
    )
    .unwrap()
}

#[test]
fn two_line_order_totals_750() {
    let catalog = Catalog::reference();
    let mut ledger = OrderLedger::default();

    // Cheese Burst 250.00, Medium, x2, Mushrooms 20.00 + Onions 30.00
    let first = line_from_answers(&catalog, "1", "2", "2", &["1", "2", "0"]);
    assert_eq!(first.line_total(), Money::from_major_minor(600, 0));
    ledger.record(first).unwrap();

    // Veggie 150.00, x1, no add-ons
    let second = line_from_answers(&catalog, "2", "1", "1", &["0"]);
    assert_eq!(second.line_total(), Money::from_major_minor(150, 0));
    ledger.record(second).unwrap();

    assert_eq!(ledger.running_total(), Money::from_major_minor(750, 0));
    assert_eq!(ledger.running_total().to_string(), "750.00");
    assert_eq!(ledger.count(), 2);
}

#[test]
fn immediate_exit_produces_no_bill() {
    let catalog = Catalog::reference();
    let ledger = OrderLedger::default();

    assert_eq!(parse_menu_choice("6", &catalog, 6), Ok(MenuChoice::Exit));
    assert_eq!(ledger.count(), 0);

    let customer = hearth_core::Customer::new("Bob", "9876543210", "a@b").unwrap();
    assert!(ledger.bill(customer, chrono::Utc::now()).is_none());
}

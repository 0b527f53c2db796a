//! Order validation example for nebula-constraint
//!
//! Registers member chains, a nested address set and an instance rule,
//! then prints the collected errors in both evaluation modes.

use nebula_constraint::prelude::*;

#[derive(Debug, Clone)]
struct Address {
    city: Option<String>,
    postal_code: String,
}

#[derive(Debug, Clone)]
struct Order {
    id: u64,
    quantity: i32,
    email: Option<String>,
    items: Vec<String>,
    shipping: Option<Address>,
}

fn order_constraints(config: ValidationConfig) -> Result<MemberConstraintSet<Order>, ConstraintError> {
    let mut set = MemberConstraintSet::with_config(config);

    set.verify_that("Id", |o: &Order| o.id)?.is_not_equal_to(0);
    set.verify_that("Quantity", |o: &Order| o.quantity)?
        .is_in_range(1, 100)?;
    set.verify_that("Email", |o: &Order| o.email.clone())?
        .is_not_null()
        .contains("@")
        .does_not_match(r"\s")?;
    set.verify_that("Items", |o: &Order| o.items.clone())?.is_not_empty();
    set.verify_that("Shipping", |o: &Order| o.shipping.clone())?
        .is_not_null()
        .and_nested(|shipping| {
            shipping
                .verify_that("City", |a: &Address| a.city.clone())?
                .is_not_null_or_empty();
            shipping
                .verify_that("PostalCode", |a: &Address| a.postal_code.clone())?
                .matches(r"^[0-9]{5}$")?;
            Ok(())
        })?;

    set.verify_that_instance()
        .satisfies_fn("has_one_line_per_item", |o: &Order| {
            usize::try_from(o.quantity).is_ok_and(|quantity| quantity >= o.items.len())
        })?;

    Ok(set)
}

fn report(title: &str, set: &MemberConstraintSet<Order>, order: &Order) {
    println!("{title}");
    match set.validate(order) {
        Ok(()) => println!("  ✓ order {} is valid", order.id),
        Err(errors) => {
            for (member, messages) in errors.iter() {
                for message in messages {
                    let member = if member.is_empty() { "<order>" } else { member };
                    println!("  ✗ {member}: {message}");
                }
            }
        }
    }
    println!();
}

fn main() -> Result<(), ConstraintError> {
    let valid = Order {
        id: 42,
        quantity: 3,
        email: Some("buyer@example.com".to_owned()),
        items: vec!["book".to_owned(), "pen".to_owned()],
        shipping: Some(Address {
            city: Some("Springfield".to_owned()),
            postal_code: "12345".to_owned(),
        }),
    };

    let broken = Order {
        id: 0,
        quantity: 500,
        email: Some("buyer at example.com".to_owned()),
        items: Vec::new(),
        shipping: Some(Address {
            city: None,
            postal_code: "ABC".to_owned(),
        }),
    };

    let collect_all = order_constraints(ValidationConfig::default())?;
    report("Collect all errors (valid order):", &collect_all, &valid);
    report("Collect all errors (broken order):", &collect_all, &broken);

    let fail_fast = order_constraints(ValidationConfig::fail_fast())?;
    report("Halt on first error (broken order):", &fail_fast, &broken);

    let german = FormatProvider::invariant().with_decimal_separator(',');
    let error = is_smaller_than(2.5_f64).error_for(&3.75);
    println!("Rendered with ',' decimals: {}", error.render(&german));

    Ok(())
}

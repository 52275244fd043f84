//! Example demonstrating typed expression trees over a stream record type

use log::debug;
use streamexpr::ops::{abs, cast, divide, plus, pow_const};
use streamexpr::{
    or_else, or_else_throw, to_double, to_int, to_int_nullable, Expression, NullableExpression,
};

struct Trade {
    price: f64,
    quantity: i32,
    discount: Option<i32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Typed Expression Algebra Demo");
    println!("=============================");

    let trade = Trade {
        price: -12.5,
        quantity: 4,
        discount: None,
    };

    // Example 1: unary chains over a plain getter
    println!("\n1. Unary Chains");
    println!("---------------");

    let magnitude = abs(to_double(|t: &Trade| t.price));
    println!("abs(price): {:?}", magnitude.eval(&trade)?);

    let whole = cast::<i64, _, _>(magnitude.clone());
    println!("toLong(abs(price)): {:?}", whole.eval(&trade)?);
    debug!("whole-units type: {:?}", whole.expression_type());

    // Example 2: binary arithmetic with promotion and constants
    println!("\n2. Binary Arithmetic");
    println!("--------------------");

    let notional = plus(
        to_double(|t: &Trade| t.price),
        to_int(|t: &Trade| t.quantity),
    );
    println!("price + quantity: {:?}", notional.eval(&trade)?);

    let unit_price = divide(
        to_double(|t: &Trade| t.price),
        to_int(|t: &Trade| t.quantity),
    );
    println!("price / quantity: {:?}", unit_price.eval(&trade)?);

    let inverse_qty = pow_const(to_int(|t: &Trade| t.quantity), -1i32);
    println!("quantity ^ -1: {:?}", inverse_qty.eval(&trade)?);

    // Example 3: the nullable bridge
    println!("\n3. Nullable Bridge");
    println!("------------------");

    let discount = to_int_nullable(|t: &Trade| t.discount);
    println!("discount: {:?}", discount.eval(&trade)?);

    let defaulted = or_else(discount.clone(), 0);
    println!("discount orElse 0: {:?}", defaulted.eval(&trade)?);

    let required = or_else_throw(discount);
    match required.eval(&trade) {
        Ok(value) => println!("discount orElseThrow: {value}"),
        Err(err) => println!("discount orElseThrow: error: {err}"),
    }

    // Example 4: structural equality across rebuilt trees
    println!("\n4. Structural Equality");
    println!("----------------------");

    let price = to_double(|t: &Trade| t.price);
    let one = cast::<i64, _, _>(abs(price.clone()));
    let two = cast::<i64, _, _>(abs(price));
    println!("rebuilt trees equal: {}", one == two);

    Ok(())
}

use patterns::{PremiumDiscount, ShoppingCart, StandardDiscount};
use recordbase::logging::init_logging;

fn main() {
    init_logging();

    let mut cart = ShoppingCart::new(StandardDiscount);
    cart.add_item(100.0);
    cart.add_item(50.0);
    print_bill(&cart);

    println!("--------------------");

    // Change strategy at runtime.
    cart.set_strategy(PremiumDiscount);
    cart.add_item(20.0);
    print_bill(&cart);
}

fn print_bill(cart: &ShoppingCart) {
    let bill = cart.checkout();
    println!("Total items cost: ${:.2}", bill.total);
    println!("Final bill after discount: ${:.2}", bill.amount_due);
}

use recordbase::logging::init_logging;
use recordbase::{Product, Repository, SledStore};

fn main() {
    init_logging();

    let repo: Box<dyn Repository<Product>> =
        Box::new(SledStore::<Product>::temporary("products").unwrap());

    for (name, price) in [("Laptop", 1200.0), ("Monitor", 300.0), ("Keyboard", 50.0)] {
        let id = repo.save(Product::new(name, price)).unwrap();
        println!("Saved {name} with ID {id}");
    }

    let mut monitor = repo.find_by_id(2).unwrap();
    monitor.price = 275.0;
    repo.update(monitor).unwrap();

    println!("{:#?}", repo.find_by_id(2).unwrap());
}

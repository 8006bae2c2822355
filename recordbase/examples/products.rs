use recordbase::logging::init_logging;
use recordbase::{MemoryStore, Product, Repository};
use tracing::{error, info};

fn main() {
    init_logging();

    // The driver only knows the trait, any backend fits here.
    let repo: Box<dyn Repository<Product>> = Box::new(MemoryStore::<Product>::new());

    let laptop_id = repo.save(Product::new("Laptop", 1200.0)).unwrap();

    let mut laptop = match repo.find_by_id(laptop_id) {
        Ok(laptop) => laptop,
        Err(err) => {
            error!(%err, "lookup failed");
            return;
        }
    };
    info!(?laptop, "found product");

    laptop.price = 1150.0;
    if let Err(err) = repo.update(laptop) {
        error!(%err, "update failed");
    }

    match repo.find_by_id(laptop_id) {
        Ok(updated) => println!("Updated Price: {:.2}", updated.price),
        Err(err) => error!(%err, "lookup failed"),
    }

    if let Err(err) = repo.find_by_id(99) {
        println!("{err}");
    }
}

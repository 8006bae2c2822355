use patterns::Document;
use recordbase::logging::init_logging;

fn main() {
    init_logging();

    let mut doc = Document::new("My new article content.");
    println!("Initial State: {}", doc.state());

    // Each step prints what happened, rejected steps leave the state alone.
    let steps: [(&str, fn(&mut Document) -> patterns::PatternResult<()>); 4] = [
        ("publish", Document::publish),
        ("request review", Document::request_review),
        ("publish", Document::publish),
        ("request review", Document::request_review),
    ];

    for (action, step) in steps {
        println!("--------------------");
        match step(&mut doc) {
            Ok(()) => println!("{action}: now {}", doc.state()),
            Err(err) => println!("{action}: {err}"),
        }
    }
}

use patterns::ServerConfig;
use recordbase::logging::init_logging;

fn main() {
    init_logging();

    let custom = ServerConfig::builder("api.service.com")
        .port(443)
        .timeout(60)
        .enable_tls()
        .build()
        .unwrap();
    println!("Custom Config: {custom:?}");

    let defaults = ServerConfig::builder("localhost").build().unwrap();
    println!("Default Config: {defaults:?}");

    if let Err(err) = ServerConfig::builder("").build() {
        println!("Rejected config: {err}");
    }
}

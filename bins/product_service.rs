use std::process::ExitCode;

use models::Product;

fn main() -> ExitCode {
    server::launch::<Product>("product-service", env!("CARGO_PKG_VERSION"))
}

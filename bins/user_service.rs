use std::process::ExitCode;

use models::User;

fn main() -> ExitCode {
    server::launch::<User>("user-service", env!("CARGO_PKG_VERSION"))
}

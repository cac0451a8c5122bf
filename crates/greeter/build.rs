// Build script for turbo-greeter - bakes the `--version` string into the binary

fn main() {
    // Release builds may pin GREETER_VERSION; local builds report the crate version
    let version =
        std::env::var("GREETER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    // Read by `#[command(version = ...)]` in cli.rs
    println!("cargo:rustc-env=GREETER_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=GREETER_VERSION");
}

/// Version string baked in at build time.
pub fn line() -> String {
    format!("awssume version {}", env!("CARGO_PKG_VERSION"))
}

pub fn show() {
    println!("{}", line());
}

/// Version reported by `--version`. An `APP_VERSION` set at build time wins
/// over the cargo package version.
pub const VERSION: &str = match option_env!("APP_VERSION") {
    Some(val) => val,
    None => env!("CARGO_PKG_VERSION"),
};

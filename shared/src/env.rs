use std::env;

/// Which profile the process runs under, selected by the `ENV` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Defaults to `Development` on debug builds when `ENV` is unset.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Ok(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
        Ok(v) if v.eq_ignore_ascii_case("development") => Environment::Development,
        _ => default_env,
    }
}

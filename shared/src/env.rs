pub static ENV_KEY: &str = "ENV";

pub enum Environment {
    Development,
    Production,
}

pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match std::env::var(ENV_KEY) {
        Err(_) => default_env,
        Ok(v) => match v.to_lowercase().as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        },
    }
}

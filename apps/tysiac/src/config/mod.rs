pub mod game;

pub use game::{load_params, params_from_env, ConfigError, PARAMS_FILE_ENV};

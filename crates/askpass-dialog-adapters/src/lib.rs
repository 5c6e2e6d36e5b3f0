pub mod config;
pub mod crypto;
pub mod wallet;

pub use config::{config_from_env, load_config, AskpassConfig, ConfigError, CONFIG_ENV_VAR};
pub use crypto::{KdfAlgorithm, KdfParams, WrappedKey};
pub use wallet::{InMemoryWallet, WalletStatus};

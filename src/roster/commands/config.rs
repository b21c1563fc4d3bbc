//! `roster config [key] [value]`. Values are checked by [`RosterConfig::set`];
//! a bad key or value is an error and leaves `config.json` untouched.

use crate::commands::{CmdMessage, CmdResult, RosterPaths};
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &RosterPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RosterConfig::load(&paths.data_dir)?;

    let message = match &action {
        ConfigAction::ShowAll => None,
        ConfigAction::ShowKey(key) => Some(CmdMessage::info(lookup(&config, key)?)),
        ConfigAction::Set(key, value) => {
            config.set(key, value)?;
            config.save(&paths.data_dir)?;
            log::info!("event=config_set key={}", key);
            Some(CmdMessage::success(format!(
                "{} set to {}",
                key,
                lookup(&config, key)?
            )))
        }
    };

    let mut result = CmdResult::default().with_config(config);
    if let Some(message) = message {
        result.add_message(message);
    }
    Ok(result)
}

fn lookup(config: &RosterConfig, key: &str) -> Result<String> {
    config
        .get(key)
        .ok_or_else(|| RosterError::Config(format!("Unknown config key: {}", key)))
}

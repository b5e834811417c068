use crate::commands::{CmdMessage, CmdResult};
use crate::config::InvConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or changes settings. `config` is the session's live copy; a
/// successful `Set` updates it and persists it to `dir`.
pub fn run(config: &mut InvConfig, dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(*config)),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut updated = *config;
            if let Err(e) = updated.set(&key, &value) {
                let mut res = CmdResult::default().with_config(*config);
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            updated.save(dir)?;
            *config = updated;

            let mut result = CmdResult::default().with_config(updated);
            let display_val = updated.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

//! The `config` subcommand family: the only commands that touch the store.

use crate::render;
use crate::store::ConfigStore;
use crate::ConfigAction;
use anyhow::bail;
use chimectl_core::utils::Redact;
use serde_json::json;

/// Keys whose values never print in clear text in table mode.
fn is_secret(key: &str) -> bool {
    matches!(key, "secret_access_key" | "session_token")
}

fn display_value(key: &str, value: &str, json: bool) -> String {
    if json || !is_secret(key) {
        value.to_string()
    } else {
        format!("{}", Redact::from(value))
    }
}

pub fn run(action: ConfigAction, json: bool) -> anyhow::Result<()> {
    let mut store = ConfigStore::load(ConfigStore::default_path()?)?;

    match action {
        ConfigAction::Set { key, value } => {
            store.set(&key, &value)?;
            store.save()?;
            log::info!("saved {key} to {}", store.path().display());
        }
        ConfigAction::Get { key } => {
            let Some(value) = store.get(&key)? else {
                bail!("config key `{key}` is not set");
            };

            if json {
                let mut map = serde_json::Map::new();
                map.insert(key.clone(), json!(value));
                println!("{}", serde_json::Value::Object(map));
            } else {
                println!("{}", display_value(&key, value, false));
            }
        }
        ConfigAction::List => {
            if json {
                let map: serde_json::Map<String, serde_json::Value> = store
                    .entries()
                    .into_iter()
                    .filter_map(|(k, v)| v.map(|v| (k.to_string(), json!(v))))
                    .collect();
                println!("{}", serde_json::Value::Object(map));
            } else {
                let rows: Vec<Vec<String>> = store
                    .entries()
                    .into_iter()
                    .map(|(k, v)| {
                        vec![
                            k.to_string(),
                            v.map_or_else(|| "-".to_string(), |v| display_value(k, v, false)),
                        ]
                    })
                    .collect();
                print!("{}", render::table(&["key", "value"], &rows));
            }
        }
    }

    Ok(())
}

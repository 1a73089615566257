//! Persisted UI preferences (localStorage)

use crate::filter::StatusFilter;

const FILTER_KEY: &str = "todo-ui.filter";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn parse_filter(raw: &str) -> Option<StatusFilter> {
    match serde_json::from_str(raw) {
        Ok(filter) => Some(filter),
        Err(e) => {
            log::warn!("[PREFS] ignoring saved filter {:?}: {}", raw, e);
            None
        }
    }
}

/// Last active filter, if one was saved and is readable
pub fn load_filter() -> Option<StatusFilter> {
    let raw = storage()?.get_item(FILTER_KEY).ok()??;
    parse_filter(&raw)
}

pub fn save_filter(filter: &StatusFilter) {
    let Some(storage) = storage() else { return };
    match serde_json::to_string(filter) {
        Ok(raw) => {
            if let Err(e) = storage.set_item(FILTER_KEY, &raw) {
                log::warn!("[PREFS] failed to save filter: {:?}", e);
            }
        }
        Err(e) => log::warn!("[PREFS] failed to encode filter: {}", e),
    }
}

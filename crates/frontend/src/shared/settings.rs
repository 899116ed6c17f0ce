//! Page-wide display settings for merch tables, shared through context and
//! persisted in localStorage.

use contracts::shared::form_settings::MerchTableSettings;
use leptos::prelude::*;

const STORAGE_KEY: &str = "merch_table_settings";

#[derive(Clone, Copy)]
pub struct SettingsContext(pub RwSignal<MerchTableSettings>);

/// Put `settings` into context for every component below the caller
pub fn provide_settings(settings: MerchTableSettings) -> RwSignal<MerchTableSettings> {
    let signal = RwSignal::new(settings);
    provide_context(SettingsContext(signal));
    signal
}

/// Settings from context, defaults when no provider is mounted
pub fn use_settings() -> Signal<MerchTableSettings> {
    match use_context::<SettingsContext>() {
        Some(ctx) => ctx.0.into(),
        None => Signal::derive(MerchTableSettings::default),
    }
}

pub fn load_settings() -> MerchTableSettings {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return MerchTableSettings::default();
    };
    match storage.get_item(STORAGE_KEY).ok().flatten() {
        Some(raw) => match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => MerchTableSettings::from_json(&value),
            Err(e) => {
                log::warn!("Ignoring unreadable {}: {}", STORAGE_KEY, e);
                MerchTableSettings::default()
            }
        },
        None => MerchTableSettings::default(),
    }
}

pub fn save_settings(settings: &MerchTableSettings) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    match serde_json::to_string(settings) {
        Ok(raw) => {
            if storage.set_item(STORAGE_KEY, &raw).is_err() {
                log::warn!("Failed to store {}", STORAGE_KEY);
            }
        }
        Err(e) => log::warn!("Failed to serialize settings: {}", e),
    }
}

//! Settings store: theme, audio and language preferences.

use crate::storage::{keys, load_raw, save_raw, Storage};
use lingo_core::settings::DEFAULT_VOLUME;
use lingo_core::{Language, Result, Settings, Theme, VocabError};
use std::sync::Arc;

pub struct SettingsStore {
    storage: Arc<dyn Storage>,
    settings: Settings,
}

impl SettingsStore {
    /// Read persisted preferences. Unreadable or invalid values fall back to
    /// their defaults individually.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let defaults = Settings::default();

        let theme = match load_bool(&*storage, keys::DARK_MODE) {
            Some(true) => Theme::Dark,
            Some(false) => Theme::Light,
            None => defaults.theme,
        };
        let audio_enabled = load_bool(&*storage, keys::SOUND_ON).unwrap_or(defaults.audio_enabled);
        let volume = load_raw(&*storage, keys::AUDIO_VOLUME)
            .and_then(|raw| match raw.trim().parse::<f32>() {
                Ok(v) => Some(Settings::clamp_volume(v)),
                Err(_) => {
                    tracing::warn!(value = %raw, "invalid stored volume, using default");
                    None
                }
            })
            .unwrap_or(DEFAULT_VOLUME);
        let source_language = load_language(&*storage, keys::SOURCE_LANGUAGE)
            .unwrap_or(defaults.source_language);
        let target_language = load_language(&*storage, keys::TARGET_LANGUAGE)
            .unwrap_or(defaults.target_language);

        let settings = Settings {
            theme,
            audio_enabled,
            volume,
            source_language,
            target_language,
        };
        tracing::info!(?settings, "settings loaded");
        Self { storage, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        self.save_theme();
    }

    /// Switch between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.settings.theme = self.settings.theme.toggled();
        self.save_theme();
        self.settings.theme
    }

    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.settings.audio_enabled = enabled;
        save_raw(&*self.storage, keys::SOUND_ON, bool_str(enabled));
    }

    /// Set playback volume, clamped into [0, 1]. Returns the stored value.
    pub fn set_volume(&mut self, volume: f32) -> f32 {
        self.settings.volume = Settings::clamp_volume(volume);
        save_raw(
            &*self.storage,
            keys::AUDIO_VOLUME,
            &self.settings.volume.to_string(),
        );
        self.settings.volume
    }

    pub fn set_source_language(&mut self, code: &str) -> Result<()> {
        let code = known_language(code)?;
        save_raw(&*self.storage, keys::SOURCE_LANGUAGE, code);
        self.settings.source_language = code.to_string();
        Ok(())
    }

    pub fn set_target_language(&mut self, code: &str) -> Result<()> {
        let code = known_language(code)?;
        save_raw(&*self.storage, keys::TARGET_LANGUAGE, code);
        self.settings.target_language = code.to_string();
        Ok(())
    }

    /// Restore every preference to its default and persist it.
    pub fn reset(&mut self) {
        self.settings = Settings::default();
        self.save_theme();
        save_raw(&*self.storage, keys::SOUND_ON, bool_str(self.settings.audio_enabled));
        save_raw(
            &*self.storage,
            keys::AUDIO_VOLUME,
            &self.settings.volume.to_string(),
        );
        save_raw(&*self.storage, keys::SOURCE_LANGUAGE, &self.settings.source_language);
        save_raw(&*self.storage, keys::TARGET_LANGUAGE, &self.settings.target_language);
    }

    fn save_theme(&self) {
        save_raw(
            &*self.storage,
            keys::DARK_MODE,
            bool_str(self.settings.theme.is_dark()),
        );
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn load_bool(storage: &dyn Storage, key: &str) -> Option<bool> {
    let raw = load_raw(storage, key)?;
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        other => {
            tracing::warn!(key, value = other, "invalid stored flag, using default");
            None
        }
    }
}

fn load_language(storage: &dyn Storage, key: &str) -> Option<String> {
    let raw = load_raw(storage, key)?;
    match Language::find(raw.trim()) {
        Some(lang) => Some(lang.code.to_string()),
        None => {
            tracing::warn!(key, value = %raw, "unknown stored language, using default");
            None
        }
    }
}

fn known_language(code: &str) -> Result<&'static str> {
    Language::find(code.trim())
        .map(|lang| lang.code)
        .ok_or_else(|| VocabError::UnknownLanguage {
            code: code.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn with_values(values: &[(&str, &str)]) -> (Arc<MemoryStorage>, SettingsStore) {
        let storage = Arc::new(MemoryStorage::with_values(
            values.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        ));
        let store = SettingsStore::load(storage.clone());
        (storage, store)
    }

    #[test]
    fn empty_storage_gives_defaults() {
        let (_, store) = with_values(&[]);
        assert_eq!(store.settings(), &Settings::default());
    }

    #[test]
    fn stored_values_are_read() {
        let (_, store) = with_values(&[
            (keys::DARK_MODE, "true"),
            (keys::SOUND_ON, "false"),
            (keys::AUDIO_VOLUME, "0.3"),
            (keys::TARGET_LANGUAGE, "fr"),
        ]);
        let settings = store.settings();
        assert_eq!(settings.theme, Theme::Dark);
        assert!(!settings.audio_enabled);
        assert_eq!(settings.volume, 0.3);
        assert_eq!(settings.target_language, "fr");
        assert_eq!(settings.source_language, "en");
    }

    #[test]
    fn invalid_values_fall_back_individually() {
        let (_, store) = with_values(&[
            (keys::DARK_MODE, "maybe"),
            (keys::SOUND_ON, "false"),
            (keys::AUDIO_VOLUME, "loud"),
            (keys::TARGET_LANGUAGE, "xx"),
        ]);
        let settings = store.settings();
        assert_eq!(settings.theme, Theme::Light);
        assert!(!settings.audio_enabled);
        assert_eq!(settings.volume, DEFAULT_VOLUME);
        assert_eq!(settings.target_language, "sq");
    }

    #[test]
    fn out_of_range_volume_is_clamped() {
        let (storage, mut store) = with_values(&[(keys::AUDIO_VOLUME, "4")]);
        assert_eq!(store.settings().volume, 1.0);
        assert_eq!(store.set_volume(-1.0), 0.0);
        assert_eq!(storage.get(keys::AUDIO_VOLUME).unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn toggle_theme_persists() {
        let (storage, mut store) = with_values(&[]);
        assert_eq!(store.toggle_theme(), Theme::Dark);
        assert_eq!(storage.get(keys::DARK_MODE).unwrap().as_deref(), Some("true"));
        assert_eq!(store.toggle_theme(), Theme::Light);
        assert_eq!(storage.get(keys::DARK_MODE).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let (_, mut store) = with_values(&[]);
        assert_eq!(
            store.set_target_language("klingon"),
            Err(VocabError::UnknownLanguage {
                code: "klingon".to_string()
            })
        );
        assert_eq!(store.settings().target_language, "sq");
        store.set_target_language("de").unwrap();
        assert_eq!(store.settings().target_language, "de");
    }

    #[test]
    fn reset_restores_defaults() {
        let (storage, mut store) = with_values(&[(keys::DARK_MODE, "true")]);
        store.set_audio_enabled(false);
        store.reset();
        assert_eq!(store.settings(), &Settings::default());
        assert_eq!(storage.get(keys::SOUND_ON).unwrap().as_deref(), Some("true"));
    }
}

use ajaxctl::constants::THEME_KEY;
use ajaxctl::storage::{MemoryStore, PreferenceStore};
use ajaxctl::theme::{Theme, ThemeController};
use ajaxctl::ui::UiState;

#[test]
fn test_theme_parsing_and_display() {
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert!("Dark".parse::<Theme>().is_err());
    assert!("sepia".parse::<Theme>().is_err());
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
}

#[test]
fn test_toggle_labels() {
    assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
    assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
}

#[test]
fn test_init_prefers_saved_theme() {
    let store = MemoryStore::new();
    store.set(THEME_KEY, "light").unwrap();
    let ui = UiState::new();
    let controller = ThemeController::new(store, ui.clone());

    assert_eq!(controller.init(true), Theme::Light);
    assert_eq!(ui.theme(), Theme::Light);
}

#[test]
fn test_init_falls_back_to_ambient_preference() {
    let ui = UiState::new();
    let controller = ThemeController::new(MemoryStore::new(), ui.clone());

    assert_eq!(controller.init(true), Theme::Dark);
    assert_eq!(ui.theme(), Theme::Dark);
    // Resolving the initial theme never writes the preference
    assert_eq!(controller.store().get(THEME_KEY), None);

    let controller = ThemeController::new(MemoryStore::new(), UiState::new());
    assert_eq!(controller.init(false), Theme::Light);
}

#[test]
fn test_init_ignores_unknown_stored_value() {
    let store = MemoryStore::new();
    store.set(THEME_KEY, "solarized").unwrap();
    let controller = ThemeController::new(store, UiState::new());

    assert_eq!(controller.saved(), None);
    assert_eq!(controller.init(true), Theme::Dark);
}

#[test]
fn test_toggle_persists_every_change() {
    let ui = UiState::new();
    let controller = ThemeController::new(MemoryStore::new(), ui.clone());
    controller.init(false);

    assert_eq!(controller.toggle().unwrap(), Theme::Dark);
    assert_eq!(controller.store().get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(ui.theme(), Theme::Dark);

    assert_eq!(controller.toggle().unwrap(), Theme::Light);
    assert_eq!(controller.store().get(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn test_double_toggle_restores_persisted_value() {
    for original in [Theme::Light, Theme::Dark] {
        let store = MemoryStore::new();
        store.set(THEME_KEY, original.as_str()).unwrap();
        let controller = ThemeController::new(store, UiState::new());
        controller.init(false);

        controller.toggle().unwrap();
        controller.toggle().unwrap();

        assert_eq!(controller.store().get(THEME_KEY).as_deref(), Some(original.as_str()));
    }
}

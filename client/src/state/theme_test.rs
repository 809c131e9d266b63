use super::*;
use crate::util::dark_mode::MemoryHost;
use leptos::reactive::owner::Owner;

fn loaded(host: MemoryHost) -> ThemePreference<MemoryHost> {
    let mut pref = ThemePreference::load(host);
    pref.initialize();
    pref
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_mode_default_is_auto() {
    assert_eq!(ThemeMode::default(), ThemeMode::Auto);
}

#[test]
fn theme_mode_parses_lowercase_names() {
    for mode in ThemeMode::ALL {
        assert_eq!(mode.as_str().parse::<ThemeMode>(), Ok(mode));
        assert_eq!(mode.to_string(), mode.as_str());
    }
}

#[test]
fn theme_mode_rejects_unknown_strings() {
    assert_eq!(
        "purple".parse::<ThemeMode>(),
        Err(ThemeError::InvalidMode("purple".to_owned()))
    );
    assert!("Dark".parse::<ThemeMode>().is_err());
    assert!("".parse::<ThemeMode>().is_err());
}

#[test]
fn theme_mode_from_persisted_falls_back_to_auto() {
    assert_eq!(ThemeMode::from_persisted(None), ThemeMode::Auto);
    assert_eq!(ThemeMode::from_persisted(Some("purple")), ThemeMode::Auto);
    assert_eq!(ThemeMode::from_persisted(Some("light")), ThemeMode::Light);
}

#[test]
fn theme_mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(mode, ThemeMode::Light);
}

// =============================================================
// set_theme
// =============================================================

#[test]
fn set_theme_updates_current_for_every_mode() {
    let mut pref = loaded(MemoryHost::new());
    for mode in ThemeMode::ALL {
        pref.set_theme(mode);
        assert_eq!(pref.current(), mode);
        assert_eq!(pref.host().item(STORAGE_KEY), Some(mode.as_str()));
    }
}

#[test]
fn set_theme_dark_marks_root_and_persists() {
    let mut pref = loaded(MemoryHost::new());
    pref.set_theme(ThemeMode::Dark);
    assert!(pref.host().is_dark_presented());
    assert_eq!(pref.host().item(STORAGE_KEY), Some("dark"));
}

#[test]
fn set_theme_light_clears_root_and_persists() {
    let mut pref = loaded(MemoryHost::new().with_item(STORAGE_KEY, "dark"));
    assert!(pref.host().is_dark_presented());
    pref.set_theme(ThemeMode::Light);
    assert!(!pref.host().is_dark_presented());
    assert_eq!(pref.host().item(STORAGE_KEY), Some("light"));
}

#[test]
fn set_theme_auto_follows_system_preference() {
    let mut dark_system = loaded(MemoryHost::new().with_system_dark(true));
    dark_system.set_theme(ThemeMode::Auto);
    assert!(dark_system.host().is_dark_presented());
    assert_eq!(dark_system.host().item(STORAGE_KEY), Some("auto"));

    let mut light_system = loaded(MemoryHost::new().with_system_dark(false));
    light_system.set_theme(ThemeMode::Dark);
    light_system.set_theme(ThemeMode::Auto);
    assert!(!light_system.host().is_dark_presented());
    assert_eq!(light_system.host().item(STORAGE_KEY), Some("auto"));
}

#[test]
fn set_theme_is_idempotent() {
    for mode in ThemeMode::ALL {
        let mut once = loaded(MemoryHost::new().with_system_dark(true));
        once.set_theme(mode);

        let mut twice = loaded(MemoryHost::new().with_system_dark(true));
        twice.set_theme(mode);
        twice.set_theme(mode);

        assert_eq!(once.current(), twice.current());
        assert_eq!(once.host().is_dark_presented(), twice.host().is_dark_presented());
        assert_eq!(once.host().item(STORAGE_KEY), twice.host().item(STORAGE_KEY));
    }
}

#[test]
fn auto_is_only_reevaluated_on_next_set_theme() {
    let mut pref = loaded(MemoryHost::new().with_system_dark(true));
    pref.set_theme(ThemeMode::Auto);
    assert!(pref.host().is_dark_presented());

    pref.host_mut().set_system_dark(false);
    assert!(pref.host().is_dark_presented());

    pref.set_theme(ThemeMode::Auto);
    assert!(!pref.host().is_dark_presented());
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn load_has_no_side_effects() {
    let pref = ThemePreference::load(MemoryHost::new().with_item(STORAGE_KEY, "dark"));
    assert_eq!(pref.current(), ThemeMode::Dark);
    assert!(!pref.host().is_dark_presented());
}

#[test]
fn initialize_applies_persisted_light() {
    let pref = loaded(
        MemoryHost::new()
            .with_item(STORAGE_KEY, "light")
            .with_system_dark(true),
    );
    assert_eq!(pref.current(), ThemeMode::Light);
    assert!(!pref.host().is_dark_presented());
}

#[test]
fn initialize_applies_persisted_dark() {
    let pref = loaded(MemoryHost::new().with_item(STORAGE_KEY, "dark"));
    assert_eq!(pref.current(), ThemeMode::Dark);
    assert!(pref.host().is_dark_presented());
}

#[test]
fn initialize_without_record_behaves_as_auto() {
    let pref = loaded(MemoryHost::new().with_system_dark(true));
    assert_eq!(pref.current(), ThemeMode::Auto);
    assert!(pref.host().is_dark_presented());
    assert_eq!(pref.host().item(STORAGE_KEY), Some("auto"));
}

#[test]
fn initialize_treats_invalid_record_as_auto() {
    let pref = loaded(
        MemoryHost::new()
            .with_item(STORAGE_KEY, "purple")
            .with_system_dark(false),
    );
    assert_eq!(pref.current(), ThemeMode::Auto);
    assert!(!pref.host().is_dark_presented());
    assert_eq!(pref.host().item(STORAGE_KEY), Some("auto"));
}

// =============================================================
// Degraded host
// =============================================================

#[test]
fn storage_unavailable_still_updates_memory_and_root() {
    let mut pref = loaded(MemoryHost::new().without_storage());
    assert_eq!(pref.current(), ThemeMode::Auto);

    pref.set_theme(ThemeMode::Dark);
    assert_eq!(pref.current(), ThemeMode::Dark);
    assert!(pref.host().is_dark_presented());
    assert_eq!(pref.host().item(STORAGE_KEY), None);
}

#[test]
fn missing_media_query_defaults_to_light_presentation() {
    let mut pref = loaded(MemoryHost::new().without_media_query());
    pref.set_theme(ThemeMode::Dark);
    pref.set_theme(ThemeMode::Auto);
    assert_eq!(pref.current(), ThemeMode::Auto);
    assert!(!pref.host().is_dark_presented());
    assert_eq!(pref.host().item(STORAGE_KEY), Some("auto"));
}

#[test]
fn missing_root_still_updates_memory_and_storage() {
    let mut pref = loaded(MemoryHost::new().without_root());
    pref.set_theme(ThemeMode::Light);
    assert_eq!(pref.current(), ThemeMode::Light);
    assert_eq!(pref.host().item(STORAGE_KEY), Some("light"));
}

// =============================================================
// ThemeContext
// =============================================================

#[test]
fn context_set_theme_updates_signal_and_preference() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = ThemeContext::new(loaded(MemoryHost::new()));
        assert_eq!(ctx.mode(), ThemeMode::Auto);

        ctx.set_theme(ThemeMode::Dark);
        assert_eq!(ctx.mode(), ThemeMode::Dark);
        ctx.with_preference(|p| {
            assert_eq!(p.current(), ThemeMode::Dark);
            assert!(p.host().is_dark_presented());
            assert_eq!(p.host().item(STORAGE_KEY), Some("dark"));
        });
    });
}

#[test]
fn provided_context_is_reachable_from_the_tree() {
    let owner = Owner::new();
    owner.with(|| {
        ThemeContext::provide(loaded(MemoryHost::new().with_item(STORAGE_KEY, "light")));
        assert_eq!(use_theme().mode(), ThemeMode::Light);
    });
}

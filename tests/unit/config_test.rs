//! Unit tests for config module

use flip::config::PlaybackConfig;
use flip::player::{Action, KeyBindings};
use flip::Config;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert!((config.playback.frame_time_ms - 83.333).abs() < 0.001);
    assert!(config.display.background.is_none());
    assert_eq!(config.keys.prev, vec!["Backspace", "Left"]);
    assert_eq!(config.keys.stop, vec!["p", "P", "Down"]);
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = config.to_toml().unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn keys_section_parses_from_toml() {
    let toml_str = r#"
[keys]
next = ["n", "PageDown"]
quit = ["Ctrl+q"]
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.keys.next, vec!["n", "PageDown"]);
    // Untouched actions keep their defaults
    assert_eq!(config.keys.skip, vec!["x", "X"]);

    let bindings = KeyBindings::try_from(&config.keys).unwrap();
    assert_eq!(bindings.next.len(), 2);
    assert!(bindings.quit[0].ctrl);
}

#[test]
fn default_keys_all_parse() {
    let bindings = KeyBindings::try_from(&Config::default().keys).unwrap();
    assert_eq!(bindings.next.len(), 5);
    assert_eq!(bindings.reset.len(), 4);
    assert_eq!(bindings.quit.len(), 3);
}

#[test]
fn display_section_parses_from_toml() {
    let config: Config = toml::from_str("[display]\nbackground = \"bg.txt\"\n").unwrap();
    assert_eq!(config.display.background.as_deref(), Some("bg.txt"));
    assert_eq!(config.playback, PlaybackConfig::default());
}

#[test]
fn skip_is_the_only_repeating_action() {
    use crossterm::event::KeyEventKind;

    assert!(Action::Skip.accepts(KeyEventKind::Repeat));
    assert!(!Action::Next.accepts(KeyEventKind::Repeat));
    assert!(!Action::Quit.accepts(KeyEventKind::Release));
}

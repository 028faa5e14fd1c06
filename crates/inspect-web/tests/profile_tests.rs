// Host-side tests for start-up profile detection and key bindings.

#![allow(dead_code)]
mod profile {
    include!("../src/profile.rs");
}
mod bindings {
    include!("../src/bindings.rs");
}

use inspect_core::{DeploymentProfile, MouseButton, ReticleMode, UiCommand};

#[test]
fn touch_probe_picks_touch_browser() {
    assert!(profile::capabilities(5, false).touch);
    assert!(profile::capabilities(0, true).touch);
    assert!(!profile::capabilities(0, false).touch);

    let config = profile::resolve_config(profile::capabilities(1, false), &[]);
    assert_eq!(config.profile, DeploymentProfile::TouchBrowser);
    assert_eq!(config.reticle().mode, ReticleMode::Gated);

    let config = profile::resolve_config(profile::capabilities(0, false), &[]);
    assert_eq!(config.profile, DeploymentProfile::DesktopBrowser);
    assert_eq!(config.reticle().mode, ReticleMode::Free);
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn decoded_query_values_override_detection() {
    // `?profile=touch%2Dbrowser&reticle=%38%30` after URL decoding.
    let overrides = pairs(&[("profile", "touch-browser"), ("reticle", "80")]);
    let config = profile::resolve_config(profile::capabilities(0, false), &overrides);
    assert_eq!(config.profile, DeploymentProfile::TouchBrowser);
    assert_eq!(config.reticle_radius, 80.0);
    assert_eq!(config.reticle().mode, ReticleMode::Gated);
}

#[test]
fn bad_query_values_keep_defaults() {
    let overrides = pairs(&[("reticle", "80"), ("speed", "abc")]);
    let config = profile::resolve_config(profile::capabilities(0, false), &overrides);
    assert_eq!(config.reticle_radius, 80.0);
    assert_eq!(config.rotation_speed, inspect_core::DEFAULT_ROTATION_SPEED);
}

#[test]
fn dom_buttons_map_to_core_buttons() {
    assert_eq!(bindings::mouse_button_from_dom(0), MouseButton::Primary);
    assert_eq!(bindings::mouse_button_from_dom(2), MouseButton::Secondary);
    assert_eq!(bindings::mouse_button_from_dom(1), MouseButton::Other);
}

#[test]
fn keys_map_to_commands() {
    assert_eq!(bindings::command_for_key("Escape"), Some(UiCommand::Back));
    assert_eq!(
        bindings::command_for_key("0"),
        Some(UiCommand::ShowLocation(String::new()))
    );
    assert_eq!(
        bindings::command_for_key("2"),
        Some(UiCommand::ShowLocation("Ceramics gallery".into()))
    );
    assert_eq!(bindings::command_for_key("4"), None);
    assert_eq!(bindings::command_for_key("q"), None);
    assert_eq!(
        bindings::command_for_key("x"),
        Some(UiCommand::ClearInspection)
    );
}

// Host-side tests for the title-bar display and input bindings.
// The native crate is a binary, so the pure modules are included directly.

#![allow(dead_code)]
mod hud {
    include!("../src/hud.rs");
}
mod keys {
    include!("../src/keys.rs");
}
mod settings {
    include!("../src/settings.rs");
}

use hud::{Hud, APP_TITLE};
use inspect_core::{
    DeploymentProfile, DisplayUpdate, PanelVisibility, ReticleIndicator, TargetText, UiCommand,
};
use winit::keyboard::KeyCode;

fn panels(object: bool, part_detail: bool, location: bool) -> DisplayUpdate {
    DisplayUpdate::Panels(PanelVisibility {
        normal: !(object || part_detail || location),
        object,
        part_detail,
        location,
    })
}

#[test]
fn idle_title_is_plain() {
    assert_eq!(Hud::new().title(), APP_TITLE);
}

#[test]
fn aimed_target_shows_in_brackets_until_lost() {
    let mut hud = Hud::new();
    assert!(!hud.apply(&DisplayUpdate::TargetText(Some(TargetText {
        name: "Helmet".into(),
        info: "Bronze".into(),
    }))));
    assert!(hud.apply(&DisplayUpdate::Reticle(ReticleIndicator::TargetFound)));
    assert_eq!(hud.title(), "Inspect - [Helmet]");

    hud.apply(&DisplayUpdate::TargetText(None));
    hud.apply(&DisplayUpdate::Reticle(ReticleIndicator::NoTarget));
    assert_eq!(hud.title(), APP_TITLE);
}

#[test]
fn panel_states_drive_title() {
    let mut hud = Hud::new();
    hud.apply(&DisplayUpdate::ObjectPanel {
        name: "Amphora".into(),
        summary: "Jar".into(),
    });
    assert!(hud.apply(&panels(true, false, false)));
    assert_eq!(hud.title(), "Inspect - Amphora");

    hud.apply(&DisplayUpdate::PartDetail {
        title: "Part 2".into(),
        description: "Handle".into(),
    });
    hud.apply(&panels(false, true, false));
    assert_eq!(hud.title(), "Inspect - Amphora - Part 2");

    hud.apply(&DisplayUpdate::LocationText("Bronze room".into()));
    hud.apply(&panels(false, false, true));
    assert_eq!(hud.title(), "Inspect - Bronze room");
}

#[test]
fn keys_cover_back_and_locations() {
    assert_eq!(keys::command_for_key(KeyCode::Escape), Some(UiCommand::Back));
    assert_eq!(
        keys::command_for_key(KeyCode::Digit3),
        Some(UiCommand::ShowLocation("Bronze room".into()))
    );
    assert_eq!(
        keys::command_for_key(KeyCode::Digit0),
        Some(UiCommand::ShowLocation(String::new()))
    );
    assert_eq!(keys::command_for_key(KeyCode::KeyQ), None);
}

#[test]
fn env_overrides_strip_prefix_and_lowercase() {
    let vars = vec![
        ("INSPECT_PROFILE".to_string(), "touch".to_string()),
        ("INSPECT_".to_string(), "x".to_string()),
        ("HOME".to_string(), "/root".to_string()),
        ("INSPECT_RETICLE".to_string(), "75".to_string()),
    ];
    assert_eq!(
        settings::env_overrides(vars.clone()),
        vec![
            ("profile".to_string(), "touch".to_string()),
            ("reticle".to_string(), "75".to_string()),
        ]
    );
    let config = settings::load_config(vars);
    assert_eq!(config.profile, DeploymentProfile::TouchBrowser);
    assert_eq!(config.reticle_radius, 75.0);
}

#[test]
fn native_defaults_to_desktop_profile() {
    let config = settings::load_config(Vec::new());
    assert_eq!(config.profile, DeploymentProfile::NativeDesktop);
}

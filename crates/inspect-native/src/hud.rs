// Window-title heads-up display. The native front-end has no panel widgets,
// so the panel state and labels are folded into the title bar.

use inspect_core::{DisplayUpdate, PanelVisibility, ReticleIndicator};

pub const APP_TITLE: &str = "Inspect";

#[derive(Debug, Default)]
pub struct Hud {
    target: Option<String>,
    reticle: ReticleIndicator,
    panels: PanelVisibility,
    object: String,
    part: String,
    location: String,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            panels: PanelVisibility {
                normal: true,
                ..PanelVisibility::default()
            },
            ..Self::default()
        }
    }

    /// Fold one update in. Returns true if the title text changed.
    pub fn apply(&mut self, update: &DisplayUpdate) -> bool {
        let before = self.title();
        match update {
            DisplayUpdate::TargetText(text) => self.target = text.as_ref().map(|t| t.name.clone()),
            DisplayUpdate::Reticle(indicator) => self.reticle = *indicator,
            DisplayUpdate::Panels(v) => self.panels = *v,
            DisplayUpdate::ObjectPanel { name, .. } => self.object = name.clone(),
            DisplayUpdate::PartDetail { title, .. } => self.part = title.clone(),
            DisplayUpdate::LocationText(name) => self.location = name.clone(),
            DisplayUpdate::PointVisibility { .. } | DisplayUpdate::PointColor { .. } => {}
        }
        self.title() != before
    }

    pub fn title(&self) -> String {
        let v = self.panels;
        if v.part_detail {
            format!("{} - {} - {}", APP_TITLE, self.object, self.part)
        } else if v.object {
            format!("{} - {}", APP_TITLE, self.object)
        } else if v.location {
            format!("{} - {}", APP_TITLE, self.location)
        } else {
            match (&self.target, self.reticle) {
                (Some(name), ReticleIndicator::TargetFound) => {
                    format!("{} - [{}]", APP_TITLE, name)
                }
                _ => APP_TITLE.to_string(),
            }
        }
    }
}

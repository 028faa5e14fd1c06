//! Mutually exclusive top-level panels.
//!
//! Exactly one [`PanelState`] is active at all times. Every transition emits
//! the full [`PanelVisibility`] in one update, never a partial one.

use crate::display::DisplayUpdate;
use crate::error::InteractionError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PanelState {
    #[default]
    Normal,
    Object,
    PartDetail,
    Location,
}

impl PanelState {
    pub const ALL: [PanelState; 4] = [
        PanelState::Normal,
        PanelState::Object,
        PanelState::PartDetail,
        PanelState::Location,
    ];

    fn index(self) -> usize {
        match self {
            PanelState::Normal => 0,
            PanelState::Object => 1,
            PanelState::PartDetail => 2,
            PanelState::Location => 3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            PanelState::Normal => "normal panel",
            PanelState::Object => "object panel",
            PanelState::PartDetail => "part detail panel",
            PanelState::Location => "location panel",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelVisibility {
    pub normal: bool,
    pub object: bool,
    pub part_detail: bool,
    pub location: bool,
}

impl PanelVisibility {
    pub fn for_state(state: PanelState) -> Self {
        Self {
            normal: state == PanelState::Normal,
            object: state == PanelState::Object,
            part_detail: state == PanelState::PartDetail,
            location: state == PanelState::Location,
        }
    }

    pub fn visible_count(&self) -> usize {
        [self.normal, self.object, self.part_detail, self.location]
            .iter()
            .filter(|v| **v)
            .count()
    }
}

/// Which panels the frontend actually provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelWiring {
    pub normal: bool,
    pub object: bool,
    pub part_detail: bool,
    pub location: bool,
}

impl Default for PanelWiring {
    fn default() -> Self {
        Self {
            normal: true,
            object: true,
            part_detail: true,
            location: true,
        }
    }
}

impl PanelWiring {
    fn has(&self, state: PanelState) -> bool {
        match state {
            PanelState::Normal => self.normal,
            PanelState::Object => self.object,
            PanelState::PartDetail => self.part_detail,
            PanelState::Location => self.location,
        }
    }

    /// The normal panel is the fallback state; without it the coordinator
    /// cannot keep exactly one panel visible.
    pub fn validate(&self) -> Result<(), InteractionError> {
        if self.normal {
            Ok(())
        } else {
            Err(InteractionError::ConfigurationMissing(
                PanelState::Normal.label().to_string(),
            ))
        }
    }
}

/// What a generic "back" press should do from the current panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackAction {
    /// PartDetail -> Object, clearing the selected detail point.
    ReturnToObject,
    /// Object -> end the inspection (which lands on Normal).
    EndInspection,
    Nothing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectPanelInfo {
    pub name: String,
    pub summary: String,
}

#[derive(Debug)]
pub struct PanelCoordinator {
    active: PanelState,
    wiring: PanelWiring,
    enabled: bool,
    location_name: String,
    missing_reported: [bool; 4],
}

impl PanelCoordinator {
    /// A coordinator whose wiring fails validation stays on Normal and
    /// ignores every transition for the rest of the run.
    pub fn new(wiring: PanelWiring) -> Self {
        let enabled = match wiring.validate() {
            Ok(()) => true,
            Err(e) => {
                log::error!("[panels] {}; panel transitions disabled", e);
                false
            }
        };
        Self {
            active: PanelState::Normal,
            wiring,
            enabled,
            location_name: String::new(),
            missing_reported: [false; 4],
        }
    }

    #[inline]
    pub fn active(&self) -> PanelState {
        self.active
    }

    #[inline]
    pub fn visibility(&self) -> PanelVisibility {
        PanelVisibility::for_state(self.active)
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last non-empty location name shown.
    #[inline]
    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    pub fn back_action(&self) -> BackAction {
        match self.active {
            PanelState::PartDetail => BackAction::ReturnToObject,
            PanelState::Object => BackAction::EndInspection,
            PanelState::Normal | PanelState::Location => BackAction::Nothing,
        }
    }

    /// Re-emit the current visibility, e.g. after a frontend (re)attaches.
    pub fn publish(&self, out: &mut Vec<DisplayUpdate>) {
        out.push(DisplayUpdate::Panels(self.visibility()));
    }

    pub fn show_normal(&mut self, out: &mut Vec<DisplayUpdate>) -> Result<(), InteractionError> {
        self.transition(PanelState::Normal, out)
    }

    /// Show the object panel, optionally refreshing its content first.
    pub fn show_object(
        &mut self,
        info: Option<ObjectPanelInfo>,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<(), InteractionError> {
        self.check(PanelState::Object)?;
        if let Some(info) = info {
            out.push(DisplayUpdate::ObjectPanel {
                name: info.name,
                summary: info.summary,
            });
        }
        self.transition(PanelState::Object, out)
    }

    pub fn show_part_detail(
        &mut self,
        number: u32,
        description: &str,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<(), InteractionError> {
        self.check(PanelState::PartDetail)?;
        self.transition(PanelState::PartDetail, out)?;
        out.push(DisplayUpdate::PartDetail {
            title: format!("Part {}", number),
            description: description.to_string(),
        });
        Ok(())
    }

    /// An empty name means "no location context" and lands on Normal.
    pub fn show_location(
        &mut self,
        name: &str,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<(), InteractionError> {
        if name.is_empty() {
            return self.show_normal(out);
        }
        self.check(PanelState::Location)?;
        self.location_name = name.to_string();
        out.push(DisplayUpdate::LocationText(self.location_name.clone()));
        self.transition(PanelState::Location, out)
    }

    /// Change the location label without switching panels.
    pub fn update_location_text(
        &mut self,
        name: &str,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<(), InteractionError> {
        self.check(PanelState::Location)?;
        self.location_name = name.to_string();
        out.push(DisplayUpdate::LocationText(self.location_name.clone()));
        Ok(())
    }

    fn check(&mut self, state: PanelState) -> Result<(), InteractionError> {
        if !self.enabled {
            return Err(InteractionError::ConfigurationMissing(
                PanelState::Normal.label().to_string(),
            ));
        }
        if self.wiring.has(state) {
            return Ok(());
        }
        let reported = &mut self.missing_reported[state.index()];
        if !*reported {
            *reported = true;
            log::error!("[panels] {} is not wired; transition disabled", state.label());
        }
        Err(InteractionError::ResourceUnavailable(state.label()))
    }

    fn transition(
        &mut self,
        state: PanelState,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<(), InteractionError> {
        self.check(state)?;
        if self.active != state {
            log::debug!("[panels] {:?} -> {:?}", self.active, state);
        }
        self.active = state;
        out.push(DisplayUpdate::Panels(PanelVisibility::for_state(state)));
        Ok(())
    }
}

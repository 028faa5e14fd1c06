//! Detail points: numbered, selectable sub-locations on inspectable objects.
//!
//! All points of all objects live in one [`DetailPointRegistry`]. The
//! registry alone records which point is selected, so at most one point is
//! Selected across the whole scene at any time.

use crate::constants::{POINT_HOVER_COLOR, POINT_NORMAL_COLOR, POINT_SELECTED_COLOR};
use crate::display::{DisplayUpdate, Rgb};
use crate::error::InteractionError;
use crate::scene::SubjectId;
use fnv::FnvHashMap;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub(crate) u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointVisibility {
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointSelection {
    Unselected,
    Hovered,
    Selected,
}

impl PointSelection {
    pub fn color(self) -> Rgb {
        match self {
            PointSelection::Unselected => POINT_NORMAL_COLOR,
            PointSelection::Hovered => POINT_HOVER_COLOR,
            PointSelection::Selected => POINT_SELECTED_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailPoint {
    owner: SubjectId,
    number: u32,
    description: String,
    local_offset: Vec3,
    visibility: PointVisibility,
    selection: PointSelection,
}

impl DetailPoint {
    #[inline]
    pub fn owner(&self) -> SubjectId {
        self.owner
    }
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }
    /// Position relative to the owning object's origin, in its local frame.
    #[inline]
    pub fn local_offset(&self) -> Vec3 {
        self.local_offset
    }
    #[inline]
    pub fn visibility(&self) -> PointVisibility {
        self.visibility
    }
    #[inline]
    pub fn selection(&self) -> PointSelection {
        self.selection
    }
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visibility == PointVisibility::Visible
    }
}

/// What a successful selection hands on to the panel layer.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedPoint {
    pub id: PointId,
    pub owner: SubjectId,
    pub number: u32,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct DetailPointRegistry {
    points: FnvHashMap<PointId, DetailPoint>,
    selected: Option<PointId>,
    next_id: u32,
}

impl DetailPointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hidden, unselected point.
    pub fn insert(
        &mut self,
        owner: SubjectId,
        number: u32,
        description: impl Into<String>,
        local_offset: Vec3,
    ) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.points.insert(
            id,
            DetailPoint {
                owner,
                number,
                description: description.into(),
                local_offset,
                visibility: PointVisibility::Hidden,
                selection: PointSelection::Unselected,
            },
        );
        id
    }

    #[inline]
    pub fn get(&self, id: PointId) -> Option<&DetailPoint> {
        self.points.get(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The single selected point, if any.
    #[inline]
    pub fn selected(&self) -> Option<PointId> {
        self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.points
            .values()
            .filter(|p| p.selection == PointSelection::Selected)
            .count()
    }

    /// Show or hide a point. Hiding the selected point deselects it.
    pub fn show(
        &mut self,
        id: PointId,
        visible: bool,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<(), InteractionError> {
        let point = self
            .points
            .get_mut(&id)
            .ok_or(InteractionError::UnknownPoint(id))?;
        if visible {
            point.visibility = PointVisibility::Visible;
            if point.selection == PointSelection::Hovered {
                point.selection = PointSelection::Unselected;
            }
            let color = point.selection.color();
            out.push(DisplayUpdate::PointVisibility { point: id, visible });
            out.push(DisplayUpdate::PointColor { point: id, color });
        } else {
            point.visibility = PointVisibility::Hidden;
            out.push(DisplayUpdate::PointVisibility { point: id, visible });
            let selection = point.selection;
            match selection {
                PointSelection::Selected => {
                    self.deselect(id, out);
                }
                PointSelection::Hovered => point.selection = PointSelection::Unselected,
                PointSelection::Unselected => {}
            }
        }
        Ok(())
    }

    /// Select a visible point, deselecting whichever point held the
    /// selection before, on any object.
    pub fn select(
        &mut self,
        id: PointId,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<SelectedPoint, InteractionError> {
        let point = self.points.get(&id).ok_or(InteractionError::UnknownPoint(id))?;
        if !point.is_visible() {
            log::warn!("[points] rejecting selection of hidden point {}", point.number);
            return Err(InteractionError::PointHidden {
                number: point.number,
            });
        }

        if let Some(prev) = self.selected.filter(|prev| *prev != id) {
            self.deselect(prev, out);
        }

        self.selected = Some(id);
        let point = self
            .points
            .get_mut(&id)
            .ok_or(InteractionError::UnknownPoint(id))?;
        point.selection = PointSelection::Selected;
        out.push(DisplayUpdate::PointColor {
            point: id,
            color: POINT_SELECTED_COLOR,
        });
        log::debug!("[points] selected point {}", point.number);

        Ok(SelectedPoint {
            id,
            owner: point.owner,
            number: point.number,
            description: point.description.clone(),
        })
    }

    /// Deselect `id` if it is the selected point. Returns whether anything
    /// changed.
    pub fn deselect(&mut self, id: PointId, out: &mut Vec<DisplayUpdate>) -> bool {
        let Some(point) = self.points.get_mut(&id) else {
            return false;
        };
        if point.selection != PointSelection::Selected {
            return false;
        }
        point.selection = PointSelection::Unselected;
        out.push(DisplayUpdate::PointColor {
            point: id,
            color: POINT_NORMAL_COLOR,
        });
        if self.selected == Some(id) {
            self.selected = None;
        }
        true
    }

    pub fn clear_selection(&mut self, out: &mut Vec<DisplayUpdate>) {
        if let Some(id) = self.selected {
            self.deselect(id, out);
        }
    }

    /// Hover colouring only applies to visible, unselected points.
    pub fn hover(&mut self, id: PointId, out: &mut Vec<DisplayUpdate>) -> bool {
        match self.points.get_mut(&id) {
            Some(p) if p.is_visible() && p.selection == PointSelection::Unselected => {
                p.selection = PointSelection::Hovered;
                out.push(DisplayUpdate::PointColor {
                    point: id,
                    color: POINT_HOVER_COLOR,
                });
                true
            }
            _ => false,
        }
    }

    pub fn unhover(&mut self, id: PointId, out: &mut Vec<DisplayUpdate>) -> bool {
        match self.points.get_mut(&id) {
            Some(p) if p.is_visible() && p.selection == PointSelection::Hovered => {
                p.selection = PointSelection::Unselected;
                out.push(DisplayUpdate::PointColor {
                    point: id,
                    color: POINT_NORMAL_COLOR,
                });
                true
            }
            _ => false,
        }
    }

    /// Drop every point owned by `owner`.
    pub fn remove_owner(&mut self, owner: SubjectId) {
        if let Some(sel) = self.selected {
            if self.points.get(&sel).map(|p| p.owner) == Some(owner) {
                self.selected = None;
            }
        }
        self.points.retain(|_, p| p.owner != owner);
    }
}

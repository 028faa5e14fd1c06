//! Pointer unification: raw touch and mouse state in, one logical pointer
//! stream out.
//!
//! Frontends push platform events into an [`InputCollector`] as they arrive
//! and call [`InputCollector::take_snapshot`] once per frame. The
//! [`PointerUnifier`] turns that snapshot into at most one [`PointerEvent`],
//! preferring the primary touch contact over the mouse. [`DragTracker`]
//! derives the per-frame drag delta used by inspection rotation.

use crate::constants::{MOUSE_DRAG_MIN_PX, ROTATION_MIN_DELTA_PX};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Begin,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Touch,
    Pointer,
}

/// One frame of the unified pointer stream. Screen position is in pixels
/// with the origin at the top-left of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Vec2,
    pub source: PointerSource,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Stationary,
    Ended,
    Cancelled,
}

impl From<TouchPhase> for PointerPhase {
    fn from(phase: TouchPhase) -> Self {
        match phase {
            TouchPhase::Began => PointerPhase::Begin,
            TouchPhase::Moved | TouchPhase::Stationary => PointerPhase::Move,
            TouchPhase::Ended => PointerPhase::End,
            TouchPhase::Cancelled => PointerPhase::Cancel,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchContact {
    pub id: u64,
    pub position: Vec2,
    pub phase: TouchPhase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Other,
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct MouseState {
    pub position: Vec2,
    pub primary_down: bool,
    pub primary_pressed: bool,
    pub primary_released: bool,
    pub secondary_down: bool,
}

/// Raw input as polled once per frame.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct InputSnapshot {
    pub touches: SmallVec<[TouchContact; 4]>,
    pub mouse: MouseState,
}

impl InputSnapshot {
    #[inline]
    pub fn primary_touch(&self) -> Option<&TouchContact> {
        self.touches.first()
    }

    /// Where a free-aim ray should go: the primary touch if any, otherwise
    /// the mouse cursor.
    #[inline]
    pub fn aim_position(&self) -> Vec2 {
        self.primary_touch()
            .map(|t| t.position)
            .unwrap_or(self.mouse.position)
    }
}

#[derive(Clone, Copy, Debug)]
struct TrackedTouch {
    contact: TouchContact,
    // Release that arrived in the same frame as the touch began; reported
    // on the following snapshot so the Began edge is not lost.
    deferred_release: Option<TouchPhase>,
}

/// Accumulates platform input events between frames.
#[derive(Default, Debug)]
pub struct InputCollector {
    touches: SmallVec<[TrackedTouch; 4]>,
    mouse: MouseState,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_started(&mut self, id: u64, position: Vec2) {
        self.touches.retain(|t| t.contact.id != id);
        self.touches.push(TrackedTouch {
            contact: TouchContact {
                id,
                position,
                phase: TouchPhase::Began,
            },
            deferred_release: None,
        });
    }

    pub fn touch_moved(&mut self, id: u64, position: Vec2) {
        if let Some(t) = self.touches.iter_mut().find(|t| t.contact.id == id) {
            t.contact.position = position;
            if t.contact.phase != TouchPhase::Began {
                t.contact.phase = TouchPhase::Moved;
            }
        }
    }

    pub fn touch_ended(&mut self, id: u64, position: Vec2) {
        self.release_touch(id, position, TouchPhase::Ended);
    }

    pub fn touch_cancelled(&mut self, id: u64, position: Vec2) {
        self.release_touch(id, position, TouchPhase::Cancelled);
    }

    fn release_touch(&mut self, id: u64, position: Vec2, phase: TouchPhase) {
        if let Some(t) = self.touches.iter_mut().find(|t| t.contact.id == id) {
            t.contact.position = position;
            if t.contact.phase == TouchPhase::Began {
                t.deferred_release = Some(phase);
            } else {
                t.contact.phase = phase;
            }
        }
    }

    pub fn mouse_moved(&mut self, position: Vec2) {
        self.mouse.position = position;
    }

    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool, position: Vec2) {
        self.mouse.position = position;
        match (button, pressed) {
            (MouseButton::Primary, true) => {
                self.mouse.primary_down = true;
                self.mouse.primary_pressed = true;
            }
            (MouseButton::Primary, false) => {
                self.mouse.primary_down = false;
                self.mouse.primary_released = true;
            }
            (MouseButton::Secondary, down) => self.mouse.secondary_down = down,
            (MouseButton::Other, _) => {}
        }
    }

    #[inline]
    pub fn has_active_touch(&self) -> bool {
        !self.touches.is_empty()
    }

    /// Produce this frame's snapshot and advance edge state for the next one.
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            touches: self.touches.iter().map(|t| t.contact).collect(),
            mouse: self.mouse,
        };

        self.touches.retain(|t| {
            !matches!(
                t.contact.phase,
                TouchPhase::Ended | TouchPhase::Cancelled
            )
        });
        for t in &mut self.touches {
            t.contact.phase = match t.deferred_release.take() {
                Some(release) => release,
                None => TouchPhase::Stationary,
            };
        }
        self.mouse.primary_pressed = false;
        self.mouse.primary_released = false;

        snapshot
    }
}

/// Produces at most one logical pointer event per frame.
///
/// An active touch contact wins over the mouse for the whole frame. A mouse
/// click that presses and releases within a single frame is reported as
/// Begin now and End on the next frame, so each frame carries one edge.
#[derive(Default, Debug)]
pub struct PointerUnifier {
    mouse_active: bool,
    pending_end: Option<PointerEvent>,
}

impl PointerUnifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, input: &InputSnapshot) -> Option<PointerEvent> {
        // A touch that arrives while a deferred mouse End is waiting takes
        // the frame; the mouse click is already complete.
        if let Some(ev) = self.pending_end.take() {
            if input.primary_touch().is_none() {
                return Some(ev);
            }
        }

        if let Some(touch) = input.primary_touch() {
            self.mouse_active = false;
            return Some(PointerEvent {
                phase: touch.phase.into(),
                position: touch.position,
                source: PointerSource::Touch,
            });
        }

        let mouse = &input.mouse;
        let event = |phase| PointerEvent {
            phase,
            position: mouse.position,
            source: PointerSource::Pointer,
        };
        if mouse.primary_pressed {
            if mouse.primary_released && !mouse.primary_down {
                self.pending_end = Some(event(PointerPhase::End));
                self.mouse_active = false;
            } else {
                self.mouse_active = true;
            }
            Some(event(PointerPhase::Begin))
        } else if mouse.primary_released && self.mouse_active {
            self.mouse_active = false;
            Some(event(PointerPhase::End))
        } else if mouse.primary_down && self.mouse_active {
            Some(event(PointerPhase::Move))
        } else {
            None
        }
    }
}

/// Converts a unified pointer stream into per-frame drag deltas.
///
/// A Begin only records the anchor. Touch moves always count; mouse moves
/// must exceed [`MOUSE_DRAG_MIN_PX`]. Anything at or below
/// [`ROTATION_MIN_DELTA_PX`] is treated as no motion.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragTracker {
    previous: Option<Vec2>,
}

impl DragTracker {
    pub fn track(&mut self, ev: &PointerEvent) -> Option<Vec2> {
        match ev.phase {
            PointerPhase::Begin => {
                self.previous = Some(ev.position);
                None
            }
            PointerPhase::Move => {
                let prev = self.previous.replace(ev.position)?;
                let delta = ev.position - prev;
                let len = delta.length();
                let meaningful = match ev.source {
                    PointerSource::Touch => true,
                    PointerSource::Pointer => len > MOUSE_DRAG_MIN_PX,
                };
                (meaningful && len > ROTATION_MIN_DELTA_PX).then_some(delta)
            }
            PointerPhase::End | PointerPhase::Cancel => {
                self.previous = None;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.previous.is_some()
    }
}

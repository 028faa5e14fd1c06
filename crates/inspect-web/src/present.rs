// Translation of core display updates into DOM operations. Kept free of
// web-sys so the mapping can be tested on the host.

use inspect_core::{DisplayUpdate, PanelVisibility, Rgb};
use smallvec::SmallVec;

pub const TARGET_NAME_ID: &str = "target-name";
pub const TARGET_INFO_ID: &str = "target-info";
pub const TARGET_BOX_ID: &str = "target-box";
pub const RETICLE_ID: &str = "reticle";
pub const NORMAL_PANEL_ID: &str = "normal-panel";
pub const OBJECT_PANEL_ID: &str = "object-panel";
pub const PART_DETAIL_PANEL_ID: &str = "part-detail-panel";
pub const LOCATION_PANEL_ID: &str = "location-panel";
pub const OBJECT_NAME_ID: &str = "object-name";
pub const OBJECT_SUMMARY_ID: &str = "object-summary";
pub const PART_TITLE_ID: &str = "part-title";
pub const PART_DESCRIPTION_ID: &str = "part-description";
pub const LOCATION_TEXT_ID: &str = "location-text";

#[derive(Clone, Debug, PartialEq)]
pub enum DomOp {
    SetText { id: &'static str, text: String },
    SetVisible { id: &'static str, visible: bool },
    SetBorderColor { id: &'static str, css: String },
}

#[inline]
pub fn css_rgb(color: Rgb) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgb({},{},{})", c(color[0]), c(color[1]), c(color[2]))
}

fn panel_ops(v: PanelVisibility, ops: &mut SmallVec<[DomOp; 4]>) {
    ops.push(DomOp::SetVisible {
        id: NORMAL_PANEL_ID,
        visible: v.normal,
    });
    ops.push(DomOp::SetVisible {
        id: OBJECT_PANEL_ID,
        visible: v.object,
    });
    ops.push(DomOp::SetVisible {
        id: PART_DETAIL_PANEL_ID,
        visible: v.part_detail,
    });
    ops.push(DomOp::SetVisible {
        id: LOCATION_PANEL_ID,
        visible: v.location,
    });
}

/// DOM work for one update. Detail point updates produce nothing here: the
/// canvas draws points straight from the registry each frame.
pub fn dom_ops(update: &DisplayUpdate) -> SmallVec<[DomOp; 4]> {
    let mut ops = SmallVec::new();
    match update {
        DisplayUpdate::TargetText(Some(text)) => {
            ops.push(DomOp::SetText {
                id: TARGET_NAME_ID,
                text: text.name.clone(),
            });
            ops.push(DomOp::SetText {
                id: TARGET_INFO_ID,
                text: text.info.clone(),
            });
            ops.push(DomOp::SetVisible {
                id: TARGET_BOX_ID,
                visible: true,
            });
        }
        DisplayUpdate::TargetText(None) => ops.push(DomOp::SetVisible {
            id: TARGET_BOX_ID,
            visible: false,
        }),
        DisplayUpdate::Reticle(indicator) => ops.push(DomOp::SetBorderColor {
            id: RETICLE_ID,
            css: css_rgb(indicator.color()),
        }),
        DisplayUpdate::Panels(v) => panel_ops(*v, &mut ops),
        DisplayUpdate::ObjectPanel { name, summary } => {
            ops.push(DomOp::SetText {
                id: OBJECT_NAME_ID,
                text: name.clone(),
            });
            ops.push(DomOp::SetText {
                id: OBJECT_SUMMARY_ID,
                text: summary.clone(),
            });
        }
        DisplayUpdate::PartDetail { title, description } => {
            ops.push(DomOp::SetText {
                id: PART_TITLE_ID,
                text: title.clone(),
            });
            ops.push(DomOp::SetText {
                id: PART_DESCRIPTION_ID,
                text: description.clone(),
            });
        }
        DisplayUpdate::LocationText(name) => ops.push(DomOp::SetText {
            id: LOCATION_TEXT_ID,
            text: name.clone(),
        }),
        DisplayUpdate::PointVisibility { .. } | DisplayUpdate::PointColor { .. } => {}
    }
    ops
}

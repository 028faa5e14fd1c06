use crate::display::{DisplayUpdate, ReticleIndicator, TargetText};
use crate::ray::Ray;
use crate::scene::{Scene, SubjectId, TargetIdentity};

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTarget {
    pub subject: SubjectId,
    pub identity: TargetIdentity,
}

/// Finds what the aim ray is pointing at and keeps the target labels and
/// reticle colour in sync with it.
///
/// Display updates are only emitted when the resolved subject changes, so a
/// steady aim produces no output.
#[derive(Debug)]
pub struct TargetResolver {
    max_distance: f32,
    current: Option<SubjectId>,
    indicator: ReticleIndicator,
}

impl TargetResolver {
    pub fn new(max_distance: f32) -> Self {
        Self {
            max_distance,
            current: None,
            indicator: ReticleIndicator::NoTarget,
        }
    }

    #[inline]
    pub fn current(&self) -> Option<SubjectId> {
        self.current
    }

    #[inline]
    pub fn indicator(&self) -> ReticleIndicator {
        self.indicator
    }

    pub fn resolve(
        &mut self,
        ray: &Ray,
        scene: &Scene,
        out: &mut Vec<DisplayUpdate>,
    ) -> Option<ResolvedTarget> {
        let resolved = scene.raycast(ray, self.max_distance).and_then(|hit| {
            let identity = scene.get(hit.subject)?.identity()?;
            Some(ResolvedTarget {
                subject: hit.subject,
                identity,
            })
        });

        let subject = resolved.as_ref().map(|r| r.subject);
        if subject != self.current || self.indicator == ReticleIndicator::Inspecting {
            self.current = subject;
            match &resolved {
                Some(r) => {
                    log::trace!("[resolver] target '{}'", r.identity.name);
                    out.push(DisplayUpdate::TargetText(Some(TargetText {
                        name: r.identity.name.clone(),
                        info: r.identity.info_text.clone(),
                    })));
                    self.set_indicator(ReticleIndicator::TargetFound, out);
                }
                None => {
                    out.push(DisplayUpdate::TargetText(None));
                    self.set_indicator(ReticleIndicator::NoTarget, out);
                }
            }
        }
        resolved
    }

    /// Pin the labels to the inspected object for the length of a session.
    pub fn enter_inspection(
        &mut self,
        subject: SubjectId,
        identity: &TargetIdentity,
        out: &mut Vec<DisplayUpdate>,
    ) {
        self.current = Some(subject);
        out.push(DisplayUpdate::TargetText(Some(TargetText {
            name: identity.name.clone(),
            info: identity.info_text.clone(),
        })));
        self.set_indicator(ReticleIndicator::Inspecting, out);
    }

    /// Hide the labels and forget the current target.
    pub fn clear(&mut self, out: &mut Vec<DisplayUpdate>) {
        self.current = None;
        out.push(DisplayUpdate::TargetText(None));
        self.set_indicator(ReticleIndicator::NoTarget, out);
    }

    fn set_indicator(&mut self, indicator: ReticleIndicator, out: &mut Vec<DisplayUpdate>) {
        if self.indicator != indicator {
            self.indicator = indicator;
            out.push(DisplayUpdate::Reticle(indicator));
        }
    }
}

//! Decides which targets a click catches.
//!
//! Without the swatter a click catches only the target it landed on. With it,
//! the click point is a circle of `radius` and every uncaught target whose
//! center is strictly inside is caught at once.

use crate::model::{Point, Target, TargetId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatchMode {
    Direct,
    Area,
}

impl CatchMode {
    pub fn for_upgrade(has_upgrade: bool) -> Self {
        if has_upgrade { CatchMode::Area } else { CatchMode::Direct }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CatchResolver {
    pub radius: f64,
    pub target_width: f64,
    pub target_height: f64,
}

impl CatchResolver {
    pub fn new(radius: f64, target_width: f64, target_height: f64) -> Self {
        Self { radius, target_width, target_height }
    }

    pub fn resolve_direct<'a>(
        &self,
        targets: impl IntoIterator<Item = &'a Target>,
        clicked: TargetId,
    ) -> Option<TargetId> {
        targets
            .into_iter()
            .find(|t| t.id == clicked && !t.is_caught())
            .map(|t| t.id)
    }

    pub fn resolve_area<'a>(
        &self,
        targets: impl IntoIterator<Item = &'a Target>,
        click: Point,
    ) -> Vec<TargetId> {
        targets
            .into_iter()
            .filter(|t| !t.is_caught())
            .filter(|t| t.center(self.target_width, self.target_height).distance(click) < self.radius)
            .map(|t| t.id)
            .collect()
    }
}

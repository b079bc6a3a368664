use crate::MAX_OPTIONS;
use crate::settings::AnimationSpec;
use std::time::Duration;

/// Radius motion of one sector. `progress` is the position along the
/// baseline (0.0) to expanded (1.0) path, so reversing keeps it as is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Motion {
    #[default]
    Resting,
    Growing {
        progress: f64,
    },
    Shrinking {
        progress: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Growing,
    Shrinking,
}

/// Snapshot of an active interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationEntry {
    pub direction: Direction,
    pub progress: f64,
    pub current_offset: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    pub should_redraw: bool,
    pub is_active: bool,
}

impl Tick {
    pub fn new(should_redraw: bool, is_active: bool) -> Self {
        Self {
            should_redraw,
            is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionAnimator {
    spec: AnimationSpec,
    motions: [Motion; MAX_OPTIONS],
}

impl SelectionAnimator {
    /// Absorbs float drift from summing frame deltas.
    const SETTLE_EPSILON: f64 = 1e-9;

    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            spec,
            motions: [Motion::Resting; MAX_OPTIONS],
        }
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn motion(&self, index: usize) -> Motion {
        self.motions.get(index).copied().unwrap_or_default()
    }

    /// Starts growing `index`, reversing a shrink in place.
    pub fn grow(&mut self, index: usize) {
        let Some(slot) = self.motions.get_mut(index) else {
            return;
        };
        *slot = match *slot {
            Motion::Resting => Motion::Growing { progress: 0.0 },
            Motion::Growing { progress } | Motion::Shrinking { progress } => {
                Motion::Growing { progress }
            }
        };
    }

    /// Starts shrinking `index`, reversing a grow in place.
    pub fn shrink(&mut self, index: usize) {
        let Some(slot) = self.motions.get_mut(index) else {
            return;
        };
        *slot = match *slot {
            Motion::Resting => Motion::Shrinking { progress: 1.0 },
            Motion::Growing { progress } | Motion::Shrinking { progress } => {
                Motion::Shrinking { progress }
            }
        };
    }

    pub fn reset(&mut self) {
        self.motions = [Motion::Resting; MAX_OPTIONS];
    }

    pub fn is_animating(&self) -> bool {
        self.motions.iter().any(|m| *m != Motion::Resting)
    }

    pub fn entry(&self, index: usize) -> Option<AnimationEntry> {
        let (direction, progress) = match self.motion(index) {
            Motion::Resting => return None,
            Motion::Growing { progress } => (Direction::Growing, progress),
            Motion::Shrinking { progress } => (Direction::Shrinking, progress),
        };
        Some(AnimationEntry {
            direction,
            progress,
            current_offset: self.offset_at(progress),
        })
    }

    /// Current radius offset of an animating sector, in logical units.
    pub fn offset(&self, index: usize) -> Option<f64> {
        self.entry(index).map(|e| e.current_offset)
    }

    /// Eased position of an animating sector between baseline (0.0) and
    /// expanded (1.0).
    pub fn expansion(&self, index: usize) -> Option<f64> {
        match self.motion(index) {
            Motion::Resting => None,
            Motion::Growing { progress } | Motion::Shrinking { progress } => {
                Some(self.spec.easing.apply(progress))
            }
        }
    }

    fn offset_at(&self, progress: f64) -> f64 {
        self.spec.max_offset * self.spec.easing.apply(progress)
    }

    /// Advances every active entry by `elapsed`. Finished entries rest.
    pub fn tick(&mut self, elapsed: Duration) -> Tick {
        let duration = self.spec.duration();
        let step = if duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / duration.as_secs_f64()
        };

        let mut advanced = false;
        for slot in &mut self.motions {
            *slot = match *slot {
                Motion::Resting => continue,
                Motion::Growing { progress } if progress + step >= 1.0 - Self::SETTLE_EPSILON => {
                    Motion::Resting
                }
                Motion::Growing { progress } => Motion::Growing {
                    progress: progress + step,
                },
                Motion::Shrinking { progress } if progress - step <= Self::SETTLE_EPSILON => {
                    Motion::Resting
                }
                Motion::Shrinking { progress } => Motion::Shrinking {
                    progress: progress - step,
                },
            };
            advanced = true;
        }

        Tick::new(advanced, self.is_animating())
    }
}

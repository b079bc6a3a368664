//! Sector geometry and selection animation for a circular (pie) selector.
//!
//! The host owns drawing, resources and persistence; it feeds pointer
//! events, size changes and frame ticks into a [`Selector`].

pub mod macros;

pub mod animator;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod item;
pub mod layout;
pub mod render;
pub mod selector;
pub mod settings;

pub use animator::{AnimationEntry, Direction, Motion, SelectionAnimator, Tick};
pub use easing::Easing;
pub use error::ConfigurationError;
pub use geometry::{Point, Rect};
pub use item::{ColorRef, IconRef, OptionSet, SelectionItem};
pub use layout::{Sector, SectorLayout, SectorSpan};
pub use render::{Renderer, ResourceProvider};
pub use selector::{NO_SELECTION, Selector};
pub use settings::{AnimationSpec, Settings};

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 20;
pub const DEFAULT_DURATION_MS: u64 = 300;
pub const DEFAULT_MAX_OFFSET: f64 = 42.0; // expanded minus baseline radius
pub const DEFAULT_ICON_SIZE: f64 = 24.0;

pub mod animation;
pub mod geometry;
pub mod input;

pub use animation::{AnimationSet, AnimationState};
pub use geometry::Rect;
pub use input::{FrameInput, InputState, Key, MouseBtn};

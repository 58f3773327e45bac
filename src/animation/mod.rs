//! Animation module - blending shape parameters between two states
//!
//! Nothing here knows about time. A caller drives a transition by
//! choosing a fraction `t` (0 = from, 1 = to) per frame and asking for the
//! blended parameters; the blended shape then generates its own path.
//!
//! This module provides:
//! - `Interpolate` for field-wise linear blending
//! - `AnimatablePair` for two values that must move together
//! - `Animatable` for shapes that expose a single animatable value

mod interpolate;

pub use interpolate::{lerp, AnimatablePair, Interpolate};

/// A shape whose animated state is captured by one `Interpolate` value
///
/// Getting and replacing the animatable data must round-trip: replacing
/// the data with what `animatable_data` returned yields an equal shape.
pub trait Animatable: Sized {
    type Data: Interpolate;

    /// The value that changes during an animation
    fn animatable_data(&self) -> Self::Data;

    /// A copy of `self` with the animatable value replaced
    fn with_animatable_data(&self, data: Self::Data) -> Self;

    /// Blend only the animatable data toward `other`
    fn animate_toward(&self, other: &Self, t: f64) -> Self {
        let data = self
            .animatable_data()
            .interpolate(&other.animatable_data(), t);
        self.with_animatable_data(data)
    }
}

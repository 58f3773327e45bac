//! Shape capability traits
//!
//! Not every shape can do everything. Rather than giving every shape a
//! method that silently does nothing, optional abilities are traits that
//! only the capable shapes implement.

/// A shape that can shrink in place
///
/// Insetting moves the outline inward by a distance on every side while
/// keeping the same center. It is how concentric copies of a shape are
/// laid out, and how a thick border stays inside the bounding box.
///
/// ## Example
///
/// ```rust
/// use drawing::shapes::{Circle, Insettable};
///
/// let rings: Vec<Circle> = (0..10).map(|i| Circle::new().inset(i as f64)).collect();
/// assert_eq!(rings[3].inset_amount(), 3.0);
/// ```
pub trait Insettable: Sized {
    /// The total inset currently applied
    fn inset_amount(&self) -> f64;

    /// A copy with the total inset replaced by `amount`
    fn with_inset_amount(&self, amount: f64) -> Self;

    /// A copy shrunk by a further `amount`
    fn inset(&self, amount: f64) -> Self {
        self.with_inset_amount(self.inset_amount() + amount)
    }
}

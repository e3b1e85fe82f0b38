mod coor2d;
mod set;

pub use coor2d::Coor2D;

/// `CoordinateSet` is the coordinate access interface of the projection
/// machinery. Strictly speaking, it is not a set, but (in abstract terms)
/// rather an indexed list, or (in more concrete terms): An array.
///
/// Here it is implemented simply as an accessor trait, that allows us to
/// access any user provided data model by iterating over its elements,
/// as long as each element exposes two ordered numeric coordinates.
pub trait CoordinateSet {
    /// Number of coordinate tuples in the set
    fn len(&self) -> usize;

    /// Access the two elements of the `index`th coordinate tuple
    fn xy(&self, index: usize) -> (f64, f64);

    /// Replace the two elements of the `index`th coordinate tuple with `x` and `y`
    fn set_xy(&mut self, index: usize, x: f64, y: f64);

    /// Companion to `len()`
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set all coordinate tuples in the set to NaN
    fn stomp(&mut self) {
        for i in 0..self.len() {
            self.set_xy(i, f64::NAN, f64::NAN);
        }
    }
}

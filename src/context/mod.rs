use crate::authoring::*;
mod minimal;
pub use minimal::Minimal;

// ----- T H E   C O N T E X T   T R A I T ---------------------------------------------

/// The `Context` trait defines the mode of communication between *Carto*
/// internals and the external context: The set of projection families
/// available, the global default parameters, and the bookkeeping of
/// instantiated operators.
pub trait Context {
    /// In general, implementations should make sure that `new` differs from `default`
    /// only by adding access to builtin resources
    fn new() -> Self
    where
        Self: Sized;

    /// Instantiate the projection given by `definition`
    fn op(&mut self, definition: &str) -> Result<OpHandle, Error>;

    /// Apply operation `op` to `operands`
    fn apply(
        &self,
        op: OpHandle,
        direction: Direction,
        operands: &mut dyn CoordinateSet,
    ) -> Result<usize, Error>;

    /// Globally defined default values (typically just `ellps=GRS80`)
    fn globals(&self) -> BTreeMap<String, String>;

    /// Register a new user-defined projection family
    fn register_op(&mut self, name: &str, constructor: OpConstructor);

    /// Helper for the `Op` instantiation logic in `Op::new(...)`
    fn get_op(&self, name: &str) -> Result<OpConstructor, Error>;

    /// The setup of the instantiated operator `op`
    fn params(&self, op: OpHandle) -> Result<&ProjectionParameters, Error>;
}

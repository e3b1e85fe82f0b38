use super::*;

/// The fundamental elements of an operator: Its provenance and mode of operation
#[derive(Debug, Default, Clone)]
pub struct OpDescriptor {
    pub invoked_as: String,      // e.g. +proj=bipc +bns +inv
    pub instantiated_as: String, // e.g. proj=bipc bns inv
    pub name: String,            // e.g. bipc
    pub inverted: bool,
}

impl OpDescriptor {
    pub fn new(params: &ProjectionParameters) -> OpDescriptor {
        OpDescriptor {
            invoked_as: params.raw.invocation.clone(),
            instantiated_as: params.raw.definition.clone(),
            name: params.name.clone(),
            inverted: params.inverted,
        }
    }
}

use crate::types::{OpError, OpInfo};


/// Trait to implement for each op that registers an op-info entry
pub trait RegistrationInfo {
    /// Unique name for the operation, the registry key
    const NAME: &'static str;

    /// Build the descriptor
    fn op_info() -> Result<OpInfo, OpError>;
}


/// Link-time registration record produced by `register_op!`
pub struct OpFactory {
    pub name: &'static str,
    pub factory: fn() -> Result<OpInfo, OpError>,
}

// Collect all registered ops
inventory::collect!(OpFactory);

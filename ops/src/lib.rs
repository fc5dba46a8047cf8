pub mod op;
pub mod types;
pub mod builder;
pub mod builtin;
pub mod json;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use core_types::DtypeFormat;
use tracing::{debug, info};

pub use builder::TbeRegOp;
pub use op::{OpFactory, RegistrationInfo};
pub use types::{
    AttrInfo, AttrValueType, FusionType, ImplyType, IoPort, OpError, OpInfo, OpPattern, ParamType,
    Signature,
};


/// Register an op-info entry with the inventory system
#[macro_export]
macro_rules! register_op {
    ($op_type:ident) => {
        inventory::submit! {
            $crate::OpFactory {
                name: <$op_type as $crate::RegistrationInfo>::NAME,
                factory: <$op_type as $crate::RegistrationInfo>::op_info,
            }
        }
    };
}


/// Op name -> descriptor table. Filled once, read-only afterwards.
#[derive(Debug, Default)]
pub struct OpRegistry {
    map: HashMap<String, Arc<OpInfo>>,
}

impl OpRegistry {
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    /// Build and register every `register_op!` entry linked into the binary
    pub fn collect_inventory(&mut self) -> Result<(), OpError> {
        for factory in inventory::iter::<OpFactory> {
            let info = (factory.factory)()?;
            if info.op_name != factory.name {
                return Err(OpError::NameMismatch { key: factory.name.to_string(), op: info.op_name });
            }
            self.register(info)?;
        }
        Ok(())
    }

    /// Register a descriptor under its op name. A name can only be taken once;
    /// a second registration fails and leaves the first entry in place.
    pub fn register(&mut self, info: OpInfo) -> Result<(), OpError> {
        info.validate()?;
        if self.map.contains_key(&info.op_name) {
            return Err(OpError::DuplicateOp(info.op_name));
        }
        debug!(op = %info.op_name, signatures = info.dtype_formats.len(), "registered op info");
        self.map.insert(info.op_name.clone(), Arc::new(info));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&OpInfo> {
        self.map.get(name).map(|b| b.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpInfo> {
        self.map.values().map(|b| b.as_ref())
    }

    /// Lookup + validate arity, then return the index of the declared
    /// signature matching the concrete one
    pub fn check(
        &self,
        name:    &str,
        inputs:  &[DtypeFormat],
        outputs: &[DtypeFormat],
    ) -> Result<usize, OpError> {
        let op = self.get(name)
            .ok_or(OpError::UnknownOp(name.to_string()))?;
        op.check_arity(inputs, outputs)?;
        op.find_signature(inputs, outputs).ok_or_else(|| OpError::UnsupportedSignature {
            op: name.to_string(),
            signature: inputs.iter().chain(outputs).copied().collect::<Vec<_>>().into(),
        })
    }
}


static GLOBAL: OnceLock<Result<OpRegistry, OpError>> = OnceLock::new();

/// The process-wide registry.
///
/// Built from the inventory on first access, from whichever thread gets
/// there first; every later call sees the same table. Nothing is torn down
/// before process exit.
pub fn global() -> Result<&'static OpRegistry, OpError> {
    GLOBAL
        .get_or_init(|| {
            let mut reg = OpRegistry::new();
            reg.collect_inventory()?;
            info!(ops = reg.len(), "op-info registry initialised");
            Ok(reg)
        })
        .as_ref()
        .map_err(Clone::clone)
}

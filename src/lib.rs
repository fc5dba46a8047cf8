//! Op-info registry for the TBE kernel backend.
//!
//! - [`core_types`]: element types, layouts and the per-port `DtypeFormat`
//! - [`tbe_ops`]: op descriptors, the registration builder and the global table
//! - [`kernel_select`]: picks the kernel for a concrete call out of that table

pub use core_types;
pub use kernel_select;
pub use tbe_ops;

pub use core_types::{DataType, DtypeFormat, Format};
pub use kernel_select::{KernelBuildInfo, KernelSelector, MatchKind, SelectError, SelectorConfig};
pub use tbe_ops::{OpError, OpInfo, OpRegistry, TbeRegOp, global};

use std::collections::HashSet;
use std::fmt;

use core_types::DtypeFormat;
use derive_more::From;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Toolchain an op-info entry is compiled by. Only TBE is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImplyType {
    #[default]
    #[serde(rename = "TBE")]
    Tbe,
}

/// Scheduling hint telling the graph fuser how the kernel may be merged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FusionType {
    #[default]
    #[serde(rename = "OPAQUE")]
    Opaque,
    #[serde(rename = "ELEMWISE")]
    Elemwise,
    #[serde(rename = "COMMREDUCE")]
    CommReduce,
    #[serde(rename = "SEGMENT")]
    Segment,
    #[serde(rename = "CONVOLUTION")]
    Convolution,
    #[serde(rename = "DYNAMIC")]
    DynamicShape,
}

/// How a kernel chooses its output layouts, when it is not a fixed table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpPattern {
    #[serde(rename = "broadcast")]
    Broadcast,
    #[serde(rename = "reduce")]
    Reduce,
    #[serde(rename = "formatAgnostic")]
    FormatAgnostic,
    #[serde(rename = "dynamicFormat")]
    DynamicFormat,
}

/// Whether a port or attribute must be supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Required,
    Optional,
    Dynamic,
}

/// Value type of an op attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrValueType {
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "str")]
    Str,
    #[serde(rename = "listInt")]
    ListInt,
    #[serde(rename = "listFloat")]
    ListFloat,
    #[serde(rename = "listBool")]
    ListBool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrInfo {
    pub name:          String,
    pub param_type:    ParamType,
    #[serde(rename = "type")]
    pub value_type:    AttrValueType,
    pub value:         String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// One input or output port of an op
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoPort {
    pub index:        usize,
    pub name:         String,
    /// Whether the tensor bound to this port is compiled into the kernel
    pub need_compile: bool,
    pub param_type:   ParamType,
    pub reshape_type: String,
    pub shape:        String,
}

/// One accepted (dtype, format) per port: inputs first, then outputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(pub Vec<DtypeFormat>);

impl Signature {
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn ports(&self) -> &[DtypeFormat] {
        &self.0
    }

    /// Input half, given the op's input count
    pub fn inputs(&self, num_inputs: usize) -> &[DtypeFormat] {
        &self.0[..num_inputs.min(self.0.len())]
    }

    /// Output half, given the op's input count
    pub fn outputs(&self, num_inputs: usize) -> &[DtypeFormat] {
        &self.0[num_inputs.min(self.0.len())..]
    }

    /// True when every port carries the same (dtype, format)
    pub fn is_uniform(&self) -> bool {
        self.0.windows(2).all(|w| w[0] == w[1])
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, df) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{df}")?;
        }
        f.write_str("]")
    }
}

/// Immutable descriptor of one kernel: ports, accepted signatures, binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpInfo {
    pub op_name:       String,
    pub imply_type:    ImplyType,
    pub fusion_type:   FusionType,
    pub async_flag:    bool,
    pub binfile_name:  String,
    pub compute_cost:  u32,
    pub kernel_name:   String,
    pub partial_flag:  bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op_pattern:    Option<OpPattern>,
    #[serde(rename = "attr", default)]
    pub attrs:         Vec<AttrInfo>,
    pub inputs:        Vec<IoPort>,
    pub outputs:       Vec<IoPort>,
    #[serde(rename = "dtype_format")]
    pub dtype_formats: Vec<Signature>,
}

impl OpInfo {
    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Ports per signature
    pub fn arity(&self) -> usize {
        self.inputs.len() + self.outputs.len()
    }

    pub fn port(&self, name: &str) -> Option<&IoPort> {
        self.inputs.iter().chain(&self.outputs).find(|p| p.name == name)
    }

    /// Distinct (dtype, format) pairs accepted at signature position `pos`,
    /// in declaration order
    pub fn supported_at(&self, pos: usize) -> Vec<DtypeFormat> {
        let mut seen = HashSet::new();
        self.dtype_formats
            .iter()
            .filter_map(|sig| sig.ports().get(pos).copied())
            .filter(|df| seen.insert(*df))
            .collect()
    }

    /// Checks port counts of a concrete call against this descriptor
    pub fn check_arity(&self, inputs: &[DtypeFormat], outputs: &[DtypeFormat]) -> Result<(), OpError> {
        if inputs.len() != self.num_inputs() {
            return Err(OpError::ArityMismatch {
                op:        self.op_name.clone(),
                direction: "inputs",
                expected:  self.num_inputs(),
                found:     inputs.len(),
            });
        }
        if outputs.len() != self.num_outputs() {
            return Err(OpError::ArityMismatch {
                op:        self.op_name.clone(),
                direction: "outputs",
                expected:  self.num_outputs(),
                found:     outputs.len(),
            });
        }
        Ok(())
    }

    /// Index of the declared signature equal to the concrete one
    pub fn find_signature(&self, inputs: &[DtypeFormat], outputs: &[DtypeFormat]) -> Option<usize> {
        let n_in = self.num_inputs();
        self.dtype_formats
            .iter()
            .position(|sig| sig.inputs(n_in) == inputs && sig.outputs(n_in) == outputs)
    }

    /// Checks the structural invariants every registered descriptor holds.
    pub fn validate(&self) -> Result<(), OpError> {
        let op = &self.op_name;
        for (field, value) in [
            ("op_name", op),
            ("kernel_name", &self.kernel_name),
            ("binfile_name", &self.binfile_name),
        ] {
            if value.is_empty() {
                return Err(OpError::MissingField { op: op.clone(), field });
            }
        }

        for ports in [&self.inputs, &self.outputs] {
            for (expected, port) in ports.iter().enumerate() {
                if port.index != expected {
                    return Err(OpError::PortIndex {
                        op: op.clone(),
                        port: port.name.clone(),
                        expected,
                        found: port.index,
                    });
                }
            }
        }

        let mut names = HashSet::new();
        for port in self.inputs.iter().chain(&self.outputs) {
            if !names.insert(port.name.as_str()) {
                return Err(OpError::DuplicatePort { op: op.clone(), port: port.name.clone() });
            }
        }

        let arity = self.arity();
        for (index, sig) in self.dtype_formats.iter().enumerate() {
            if sig.arity() != arity {
                return Err(OpError::SignatureArity {
                    op: op.clone(),
                    index,
                    expected: arity,
                    found: sig.arity(),
                });
            }
            if let Some(first) = self.dtype_formats[..index].iter().position(|s| s == sig) {
                return Err(OpError::DuplicateSignature { op: op.clone(), first, second: index });
            }
        }
        Ok(())
    }
}

/// Errors during descriptor construction, registration and lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpError {
    #[error("unknown op `{0}`")]
    UnknownOp(String),
    #[error("registration `{key}` builds op info named `{op}`")]
    NameMismatch { key: String, op: String },
    #[error("op `{0}` is already registered")]
    DuplicateOp(String),
    #[error("`{op}` takes {expected} {direction}, got {found}")]
    ArityMismatch { op: String, direction: &'static str, expected: usize, found: usize },
    #[error("`{op}` has no kernel for {signature}")]
    UnsupportedSignature { op: String, signature: Signature },
    #[error("`{op}` signature #{index} has {found} ports, expected {expected}")]
    SignatureArity { op: String, index: usize, expected: usize, found: usize },
    #[error("`{op}` port `{port}` declared with index {found}, expected {expected}")]
    PortIndex { op: String, port: String, expected: usize, found: usize },
    #[error("`{op}` declares port `{port}` twice")]
    DuplicatePort { op: String, port: String },
    #[error("`{op}` signature #{second} repeats signature #{first}")]
    DuplicateSignature { op: String, first: usize, second: usize },
    #[error("`{op}` is missing `{field}`")]
    MissingField { op: String, field: &'static str },
    #[error("op-info json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for OpError {
    fn from(e: serde_json::Error) -> Self {
        OpError::Json(e.to_string())
    }
}

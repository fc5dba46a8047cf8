use core_types::DtypeFormat;

use crate::types::{
    AttrInfo, AttrValueType, FusionType, ImplyType, IoPort, OpError, OpInfo, OpPattern, ParamType,
    Signature,
};

const DEFAULT_COMPUTE_COST: u32 = 10;

/// Fluent builder for a TBE op-info entry.
///
/// Setters never fail; [`TbeRegOp::get_op_info`] checks the finished
/// descriptor with [`OpInfo::validate`].
#[derive(Debug, Clone)]
pub struct TbeRegOp {
    op_name:       String,
    fusion_type:   FusionType,
    async_flag:    bool,
    binfile_name:  Option<String>,
    compute_cost:  u32,
    kernel_name:   Option<String>,
    partial_flag:  bool,
    op_pattern:    Option<OpPattern>,
    attrs:         Vec<AttrInfo>,
    inputs:        Vec<IoPort>,
    outputs:       Vec<IoPort>,
    dtype_formats: Vec<Signature>,
}

impl TbeRegOp {
    pub fn new(op_name: impl Into<String>) -> Self {
        Self {
            op_name:       op_name.into(),
            fusion_type:   FusionType::default(),
            async_flag:    false,
            binfile_name:  None,
            compute_cost:  DEFAULT_COMPUTE_COST,
            kernel_name:   None,
            partial_flag:  false,
            op_pattern:    None,
            attrs:         Vec::new(),
            inputs:        Vec::new(),
            outputs:       Vec::new(),
            dtype_formats: Vec::new(),
        }
    }

    pub fn fusion_type(mut self, fusion_type: FusionType) -> Self {
        self.fusion_type = fusion_type;
        self
    }

    pub fn async_flag(mut self, async_flag: bool) -> Self {
        self.async_flag = async_flag;
        self
    }

    pub fn binfile_name(mut self, name: impl Into<String>) -> Self {
        self.binfile_name = Some(name.into());
        self
    }

    pub fn compute_cost(mut self, cost: u32) -> Self {
        self.compute_cost = cost;
        self
    }

    pub fn kernel_name(mut self, name: impl Into<String>) -> Self {
        self.kernel_name = Some(name.into());
        self
    }

    pub fn partial_flag(mut self, partial: bool) -> Self {
        self.partial_flag = partial;
        self
    }

    pub fn op_pattern(mut self, pattern: OpPattern) -> Self {
        self.op_pattern = Some(pattern);
        self
    }

    pub fn attr(
        mut self,
        name: impl Into<String>,
        param_type: ParamType,
        value_type: AttrValueType,
        value: impl Into<String>,
        default_value: Option<&str>,
    ) -> Self {
        self.attrs.push(AttrInfo {
            name: name.into(),
            param_type,
            value_type,
            value: value.into(),
            default_value: default_value.map(str::to_string),
        });
        self
    }

    pub fn input(
        mut self,
        index: usize,
        name: impl Into<String>,
        need_compile: bool,
        param_type: ParamType,
        reshape_type: impl Into<String>,
    ) -> Self {
        self.inputs.push(port(index, name, need_compile, param_type, reshape_type));
        self
    }

    pub fn output(
        mut self,
        index: usize,
        name: impl Into<String>,
        need_compile: bool,
        param_type: ParamType,
        reshape_type: impl Into<String>,
    ) -> Self {
        self.outputs.push(port(index, name, need_compile, param_type, reshape_type));
        self
    }

    /// One accepted signature, one entry per port (inputs, then outputs)
    pub fn dtype_format(mut self, ports: &[DtypeFormat]) -> Self {
        self.dtype_formats.push(ports.to_vec().into());
        self
    }

    pub fn get_op_info(self) -> Result<OpInfo, OpError> {
        let kernel_name = self.kernel_name.unwrap_or_else(|| snake_case(&self.op_name));
        let binfile_name = self.binfile_name.unwrap_or_else(|| format!("{kernel_name}.so"));
        let info = OpInfo {
            op_name: self.op_name,
            imply_type: ImplyType::Tbe,
            fusion_type: self.fusion_type,
            async_flag: self.async_flag,
            binfile_name,
            compute_cost: self.compute_cost,
            kernel_name,
            partial_flag: self.partial_flag,
            op_pattern: self.op_pattern,
            attrs: self.attrs,
            inputs: self.inputs,
            outputs: self.outputs,
            dtype_formats: self.dtype_formats,
        };
        info.validate()?;
        Ok(info)
    }
}

fn port(
    index: usize,
    name: impl Into<String>,
    need_compile: bool,
    param_type: ParamType,
    reshape_type: impl Into<String>,
) -> IoPort {
    IoPort {
        index,
        name: name.into(),
        need_compile,
        param_type,
        reshape_type: reshape_type.into(),
        shape: "all".to_string(),
    }
}

/// `BNTrainingReduce` -> `bn_training_reduce`
fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || (prev.is_ascii_uppercase() && next_lower) {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

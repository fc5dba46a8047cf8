use core_types::DtypeFormat;

use crate::builder::TbeRegOp;
use crate::op::RegistrationInfo;
use crate::register_op;
use crate::types::{FusionType, OpError, OpInfo, ParamType};


/// "Assign": writes `value` into `resource`, `y` aliases the result.
/// Every signature repeats one (dtype, format) across all three ports.
pub struct AssignOp;

impl RegistrationInfo for AssignOp {
    const NAME: &'static str = "Assign";

    fn op_info() -> Result<OpInfo, OpError> {
        TbeRegOp::new(Self::NAME)
            .fusion_type(FusionType::Opaque)
            .async_flag(false)
            .binfile_name("assign.so")
            .compute_cost(10)
            .kernel_name("assign")
            .partial_flag(true)
            .input(0, "resource", false, ParamType::Required, "all")
            .input(1, "value", false, ParamType::Required, "all")
            .output(0, "y", false, ParamType::Required, "all")
            .dtype_format(&[DtypeFormat::I8_DEFAULT, DtypeFormat::I8_DEFAULT, DtypeFormat::I8_DEFAULT])
            .dtype_format(&[DtypeFormat::I8_5HD, DtypeFormat::I8_5HD, DtypeFormat::I8_5HD])
            .dtype_format(&[DtypeFormat::U8_DEFAULT, DtypeFormat::U8_DEFAULT, DtypeFormat::U8_DEFAULT])
            .dtype_format(&[DtypeFormat::U8_5HD, DtypeFormat::U8_5HD, DtypeFormat::U8_5HD])
            .dtype_format(&[DtypeFormat::I16_DEFAULT, DtypeFormat::I16_DEFAULT, DtypeFormat::I16_DEFAULT])
            .dtype_format(&[DtypeFormat::I16_5HD, DtypeFormat::I16_5HD, DtypeFormat::I16_5HD])
            .dtype_format(&[DtypeFormat::U16_DEFAULT, DtypeFormat::U16_DEFAULT, DtypeFormat::U16_DEFAULT])
            .dtype_format(&[DtypeFormat::U16_5HD, DtypeFormat::U16_5HD, DtypeFormat::U16_5HD])
            .dtype_format(&[DtypeFormat::I32_DEFAULT, DtypeFormat::I32_DEFAULT, DtypeFormat::I32_DEFAULT])
            .dtype_format(&[DtypeFormat::I32_5HD, DtypeFormat::I32_5HD, DtypeFormat::I32_5HD])
            .dtype_format(&[DtypeFormat::U32_DEFAULT, DtypeFormat::U32_DEFAULT, DtypeFormat::U32_DEFAULT])
            .dtype_format(&[DtypeFormat::U32_5HD, DtypeFormat::U32_5HD, DtypeFormat::U32_5HD])
            .dtype_format(&[DtypeFormat::I64_DEFAULT, DtypeFormat::I64_DEFAULT, DtypeFormat::I64_DEFAULT])
            .dtype_format(&[DtypeFormat::I64_5HD, DtypeFormat::I64_5HD, DtypeFormat::I64_5HD])
            .dtype_format(&[DtypeFormat::U64_DEFAULT, DtypeFormat::U64_DEFAULT, DtypeFormat::U64_DEFAULT])
            .dtype_format(&[DtypeFormat::U64_5HD, DtypeFormat::U64_5HD, DtypeFormat::U64_5HD])
            .dtype_format(&[DtypeFormat::F16_DEFAULT, DtypeFormat::F16_DEFAULT, DtypeFormat::F16_DEFAULT])
            .dtype_format(&[DtypeFormat::F16_5HD, DtypeFormat::F16_5HD, DtypeFormat::F16_5HD])
            .dtype_format(&[DtypeFormat::F32_DEFAULT, DtypeFormat::F32_DEFAULT, DtypeFormat::F32_DEFAULT])
            .dtype_format(&[DtypeFormat::F32_5HD, DtypeFormat::F32_5HD, DtypeFormat::F32_5HD])
            .dtype_format(&[DtypeFormat::F32_FRAC_NZ, DtypeFormat::F32_FRAC_NZ, DtypeFormat::F32_FRAC_NZ])
            .get_op_info()
    }
}

register_op!(AssignOp);


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use core_types::{DataType, Format};

    use super::*;
    use crate::types::ImplyType;

    fn info() -> OpInfo {
        AssignOp::op_info().unwrap()
    }

    #[test]
    fn descriptor_fields() {
        let info = info();
        assert_eq!(info.op_name, "Assign");
        assert_eq!(info.imply_type, ImplyType::Tbe);
        assert_eq!(info.fusion_type, FusionType::Opaque);
        assert!(!info.async_flag);
        assert_eq!(info.binfile_name, "assign.so");
        assert_eq!(info.compute_cost, 10);
        assert_eq!(info.kernel_name, "assign");
        assert!(info.partial_flag);
        assert!(info.attrs.is_empty());
        assert_eq!(info.op_pattern, None);
    }

    #[test]
    fn ports() {
        let info = info();
        let names: Vec<_> = info.inputs.iter().map(|p| (p.index, p.name.as_str())).collect();
        assert_eq!(names, [(0, "resource"), (1, "value")]);
        assert_eq!(info.outputs.len(), 1);
        assert_eq!((info.outputs[0].index, info.outputs[0].name.as_str()), (0, "y"));
        for port in info.inputs.iter().chain(&info.outputs) {
            assert!(!port.need_compile);
            assert_eq!(port.param_type, ParamType::Required);
            assert_eq!(port.reshape_type, "all");
        }
    }

    #[test]
    fn every_signature_is_uniform_across_ports() {
        let info = info();
        assert_eq!(info.dtype_formats.len(), 21);
        for sig in &info.dtype_formats {
            assert_eq!(sig.arity(), 3);
            assert!(sig.is_uniform(), "{sig} mixes types or layouts");
            assert_eq!(sig.outputs(2), &sig.inputs(2)[..1]);
        }
    }

    #[test]
    fn exactly_the_declared_combinations() {
        let declared: HashSet<DtypeFormat> =
            info().dtype_formats.iter().map(|sig| sig.ports()[0]).collect();
        assert_eq!(declared.len(), 21);

        let mut expected = HashSet::new();
        for dt in [
            DataType::I8, DataType::U8, DataType::I16, DataType::U16, DataType::I32,
            DataType::U32, DataType::I64, DataType::U64, DataType::F16, DataType::F32,
        ] {
            expected.insert(DtypeFormat::new(dt, Format::Default));
            expected.insert(DtypeFormat::new(dt, Format::Nc1hwc0));
        }
        expected.insert(DtypeFormat::F32_FRAC_NZ);
        assert_eq!(declared, expected);
    }

    #[test]
    fn frac_nz_only_for_f32() {
        let info = info();
        let nz: Vec<_> = info
            .dtype_formats
            .iter()
            .enumerate()
            .filter(|(_, sig)| sig.ports().iter().any(|df| df.format == Format::FracNz))
            .collect();
        assert_eq!(nz.len(), 1);
        let (index, sig) = nz[0];
        assert_eq!(index, 20);
        assert_eq!(sig.ports(), &[DtypeFormat::F32_FRAC_NZ; 3]);
    }
}

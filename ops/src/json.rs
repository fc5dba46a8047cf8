//! Op-info JSON, the format handed to the native op library.
//!
//! ```text
//! {"op_name":"Assign","imply_type":"TBE","fusion_type":"OPAQUE",...,
//!  "dtype_format":[[["int8","DefaultFormat"],["int8","DefaultFormat"],["int8","DefaultFormat"]],...]}
//! ```

use crate::OpRegistry;
use crate::types::{OpError, OpInfo};

pub fn to_json(info: &OpInfo) -> Result<String, OpError> {
    Ok(serde_json::to_string(info)?)
}

pub fn to_json_pretty(info: &OpInfo) -> Result<String, OpError> {
    Ok(serde_json::to_string_pretty(info)?)
}

/// Parses and validates a single descriptor
pub fn from_json(s: &str) -> Result<OpInfo, OpError> {
    let info: OpInfo = serde_json::from_str(s)?;
    info.validate()?;
    Ok(info)
}

/// All registered descriptors as a JSON array, sorted by op name
pub fn registry_to_json(registry: &OpRegistry) -> Result<String, OpError> {
    let infos: Vec<&OpInfo> = registry
        .names()
        .into_iter()
        .filter_map(|name| registry.get(name))
        .collect();
    Ok(serde_json::to_string(&infos)?)
}


#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::builtin::assign::AssignOp;
    use crate::op::RegistrationInfo;

    #[test]
    fn assign_wire_format() {
        let info = AssignOp::op_info().unwrap();
        let v: Value = serde_json::from_str(&to_json(&info).unwrap()).unwrap();

        assert_eq!(v["op_name"], "Assign");
        assert_eq!(v["imply_type"], "TBE");
        assert_eq!(v["fusion_type"], "OPAQUE");
        assert_eq!(v["async_flag"], false);
        assert_eq!(v["binfile_name"], "assign.so");
        assert_eq!(v["compute_cost"], 10);
        assert_eq!(v["kernel_name"], "assign");
        assert_eq!(v["partial_flag"], true);
        assert!(v.get("op_pattern").is_none());
        assert_eq!(v["attr"], Value::Array(vec![]));

        assert_eq!(v["inputs"][1]["name"], "value");
        assert_eq!(v["inputs"][1]["param_type"], "required");
        assert_eq!(v["outputs"][0]["name"], "y");
        assert_eq!(v["outputs"][0]["reshape_type"], "all");

        let sigs = v["dtype_format"].as_array().unwrap();
        assert_eq!(sigs.len(), 21);
        assert_eq!(sigs[1][0], serde_json::json!(["int8", "NC1HWC0"]));
        assert_eq!(sigs[20][2], serde_json::json!(["float32", "FRACTAL_NZ"]));
    }

    #[test]
    fn parses_back_and_validates() {
        let info = AssignOp::op_info().unwrap();
        let back = from_json(&to_json_pretty(&info).unwrap()).unwrap();
        assert_eq!(back, info);

        let mut broken: Value = serde_json::from_str(&to_json(&info).unwrap()).unwrap();
        broken["dtype_format"][3] = serde_json::json!([["uint8", "NC1HWC0"]]);
        let err = from_json(&broken.to_string()).unwrap_err();
        assert!(matches!(err, OpError::SignatureArity { index: 3, found: 1, .. }));

        assert!(matches!(from_json("{"), Err(OpError::Json(_))));
    }

    #[test]
    fn registry_export_is_sorted() {
        let mut reg = OpRegistry::new();
        reg.register(AssignOp::op_info().unwrap()).unwrap();
        reg.register(
            crate::TbeRegOp::new("Abs")
                .input(0, "x", false, crate::types::ParamType::Required, "all")
                .output(0, "y", false, crate::types::ParamType::Required, "all")
                .get_op_info()
                .unwrap(),
        )
        .unwrap();

        let v: Value = serde_json::from_str(&registry_to_json(&reg).unwrap()).unwrap();
        let names: Vec<_> = v.as_array().unwrap().iter().map(|e| e["op_name"].clone()).collect();
        assert_eq!(names, ["Abs", "Assign"]);
    }
}

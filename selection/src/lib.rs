mod cache;
mod config;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use core_types::DtypeFormat;
use tbe_ops::{FusionType, OpError, OpInfo, OpRegistry, Signature};

use cache::{KernelCache, KernelKey};
pub use config::SelectorConfig;


/// How the chosen kernel relates to the requested signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchKind {
    /// A declared signature equals the request
    Exact,
    /// Same dtypes, but the listed signature positions need a layout
    /// conversion before (inputs) or after (outputs) the kernel runs
    FormatTransform { ports: Vec<usize> },
}

/// Everything a graph compiler needs to emit a call to the kernel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelBuildInfo {
    pub op_name:         String,
    pub kernel_name:     String,
    pub binfile:         PathBuf,
    pub fusion_type:     FusionType,
    pub compute_cost:    u32,
    /// Index into the op's declared signatures
    pub signature_index: usize,
    /// Layouts the kernel itself runs with
    pub inputs:          Vec<DtypeFormat>,
    pub outputs:         Vec<DtypeFormat>,
    pub match_kind:      MatchKind,
}

#[derive(Debug, Error)]
pub enum SelectError {
    #[error(transparent)]
    Op(#[from] OpError),
    #[error("no kernel of `{op}` accepts {signature}")]
    NoMatchingKernel { op: String, signature: Signature },
    #[error("kernel binary for `{op}` not found at {}", .path.display())]
    MissingBinary { op: String, path: PathBuf },
    #[error("reading selector config {}", .path.display())]
    ConfigIo { path: PathBuf, #[source] source: std::io::Error },
    #[error("parsing selector config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}


/// Picks the concrete kernel for an op call out of the registry's table.
pub struct KernelSelector<'r> {
    registry: &'r OpRegistry,
    config:   SelectorConfig,
    cache:    KernelCache,
}

impl<'r> KernelSelector<'r> {
    pub fn new(registry: &'r OpRegistry, config: SelectorConfig) -> Self {
        Self { registry, config, cache: KernelCache::default() }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Number of cached selections
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn select(
        &self,
        op: &str,
        inputs: &[DtypeFormat],
        outputs: &[DtypeFormat],
    ) -> Result<Arc<KernelBuildInfo>, SelectError> {
        let key = KernelKey {
            op:    Arc::from(op),
            t_in:  inputs.to_vec(),
            t_out: outputs.to_vec(),
        };

        // cache lookup
        if let Some(hit) = self.cache.get(&key) {
            if self.config.require_binary && !hit.binfile.is_file() {
                self.cache.remove(&key);
                return Err(SelectError::MissingBinary { op: op.to_string(), path: hit.binfile.clone() });
            }
            debug!(op, kernel = %hit.kernel_name, "kernel selection cache hit");
            return Ok(hit);
        }

        let info = self.registry.get(op)
            .ok_or(OpError::UnknownOp(op.to_string()))?;
        info.check_arity(inputs, outputs)?;

        let (signature_index, match_kind) = match info.find_signature(inputs, outputs) {
            Some(index) => (index, MatchKind::Exact),
            None if self.config.allow_format_transform => {
                let (index, ports) = closest_by_dtype(info, inputs, outputs)
                    .ok_or_else(|| no_match(op, inputs, outputs))?;
                warn!(op, signature = index, ?ports, "no exact kernel, layouts must be converted");
                (index, MatchKind::FormatTransform { ports })
            }
            None => return Err(no_match(op, inputs, outputs)),
        };

        let binfile = self.config.binary_path(&info.binfile_name);
        if self.config.require_binary && !binfile.is_file() {
            return Err(SelectError::MissingBinary { op: op.to_string(), path: binfile });
        }

        let sig = &info.dtype_formats[signature_index];
        let n_in = info.num_inputs();
        let build = KernelBuildInfo {
            op_name:      info.op_name.clone(),
            kernel_name:  info.kernel_name.clone(),
            binfile,
            fusion_type:  info.fusion_type,
            compute_cost: info.compute_cost,
            signature_index,
            inputs:       sig.inputs(n_in).to_vec(),
            outputs:      sig.outputs(n_in).to_vec(),
            match_kind,
        };
        debug!(op, kernel = %build.kernel_name, signature = signature_index, "kernel selected");
        Ok(self.cache.insert(key, build))
    }
}

fn no_match(op: &str, inputs: &[DtypeFormat], outputs: &[DtypeFormat]) -> SelectError {
    SelectError::NoMatchingKernel {
        op:        op.to_string(),
        signature: inputs.iter().chain(outputs).copied().collect::<Vec<_>>().into(),
    }
}

/// Declared signature with the request's dtypes on every port and the most
/// layouts in common with it. Ties go to the earlier declaration.
fn closest_by_dtype(
    info: &OpInfo,
    inputs: &[DtypeFormat],
    outputs: &[DtypeFormat],
) -> Option<(usize, Vec<usize>)> {
    let wanted: Vec<DtypeFormat> = inputs.iter().chain(outputs).copied().collect();
    let mut best: Option<(usize, Vec<usize>)> = None;

    for (index, sig) in info.dtype_formats.iter().enumerate() {
        let ports = sig.ports();
        if ports.len() != wanted.len() || ports.iter().zip(&wanted).any(|(a, b)| a.dtype != b.dtype) {
            continue;
        }
        let differing: Vec<usize> = ports
            .iter()
            .zip(&wanted)
            .enumerate()
            .filter(|(_, (a, b))| a.format != b.format)
            .map(|(i, _)| i)
            .collect();
        let better = match &best {
            Some((_, current)) => differing.len() < current.len(),
            None => true,
        };
        if better {
            best = Some((index, differing));
        }
    }
    best
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tbe_ops::RegistrationInfo;
    use tbe_ops::builtin::assign::AssignOp;
    use tbe_ops::{ParamType, TbeRegOp};

    fn registry() -> OpRegistry {
        let mut reg = OpRegistry::new();
        reg.register(AssignOp::op_info().unwrap()).unwrap();
        reg
    }

    #[test]
    fn exact_match_and_cache() {
        let reg = registry();
        let selector = KernelSelector::new(&reg, SelectorConfig::default());
        let df = DtypeFormat::F32_5HD;

        let first = selector.select("Assign", &[df, df], &[df]).unwrap();
        assert_eq!(first.match_kind, MatchKind::Exact);
        assert_eq!(first.kernel_name, "assign");
        assert_eq!(first.binfile, PathBuf::from("assign.so"));
        assert_eq!(first.signature_index, 19);
        assert_eq!(first.inputs, vec![df, df]);
        assert_eq!(first.outputs, vec![df]);
        assert_eq!(first.compute_cost, 10);

        let second = selector.select("Assign", &[df, df], &[df]).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(selector.cache_len(), 1);

        selector.clear_cache();
        assert_eq!(selector.cache_len(), 0);
    }

    #[test]
    fn format_transform_fallback() {
        let reg = registry();
        let selector = KernelSelector::new(&reg, SelectorConfig::default());

        // NCHW is never declared for Assign; float16 5HD is closest after Default
        let nchw = DtypeFormat::F16_NCHW;
        let sel = selector.select("Assign", &[nchw, DtypeFormat::F16_5HD], &[DtypeFormat::F16_5HD]).unwrap();
        assert_eq!(sel.signature_index, 17);
        assert_eq!(sel.match_kind, MatchKind::FormatTransform { ports: vec![0] });
        assert_eq!(sel.inputs, vec![DtypeFormat::F16_5HD; 2]);

        // everything differs: the first same-dtype declaration wins
        let sel = selector.select("Assign", &[nchw, nchw], &[nchw]).unwrap();
        assert_eq!(sel.signature_index, 16);
        assert_eq!(sel.match_kind, MatchKind::FormatTransform { ports: vec![0, 1, 2] });
    }

    #[test]
    fn no_kernel_for_dtype() {
        let reg = registry();
        let selector = KernelSelector::new(&reg, SelectorConfig::default());
        let b = DtypeFormat::BOOL_DEFAULT;

        let err = selector.select("Assign", &[b, b], &[b]).unwrap_err();
        assert!(matches!(err, SelectError::NoMatchingKernel { ref op, .. } if op == "Assign"));
        assert_eq!(selector.cache_len(), 0);
    }

    #[test]
    fn strict_config_disables_fallback() {
        let reg = registry();
        let config = SelectorConfig { allow_format_transform: false, ..SelectorConfig::default() };
        let selector = KernelSelector::new(&reg, config);
        let nchw = DtypeFormat::F32_NCHW;

        let err = selector.select("Assign", &[nchw, nchw], &[nchw]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no kernel of `Assign` accepts [float32:NCHW, float32:NCHW, float32:NCHW]"
        );
    }

    #[test]
    fn registry_errors_pass_through() {
        let reg = registry();
        let selector = KernelSelector::new(&reg, SelectorConfig::default());
        let df = DtypeFormat::I32_DEFAULT;

        let err = selector.select("AssignAdd", &[df, df], &[df]).unwrap_err();
        assert!(matches!(err, SelectError::Op(OpError::UnknownOp(_))));

        let err = selector.select("Assign", &[df], &[df, df]).unwrap_err();
        assert!(matches!(err, SelectError::Op(OpError::ArityMismatch { direction: "inputs", .. })));
    }

    #[test]
    fn binary_must_exist_when_required() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry();
        let config = SelectorConfig {
            kernel_dir: Some(dir.path().to_path_buf()),
            require_binary: true,
            ..SelectorConfig::default()
        };
        let selector = KernelSelector::new(&reg, config);
        let df = DtypeFormat::U8_DEFAULT;

        match selector.select("Assign", &[df, df], &[df]).unwrap_err() {
            SelectError::MissingBinary { op, path } => {
                assert_eq!(op, "Assign");
                assert_eq!(path, dir.path().join("assign.so"));
            }
            other => panic!("expected MissingBinary, got {other:?}"),
        }

        std::fs::write(dir.path().join("assign.so"), b"\x7fELF").unwrap();
        let sel = selector.select("Assign", &[df, df], &[df]).unwrap();
        assert_eq!(sel.binfile, dir.path().join("assign.so"));
    }

    #[test]
    fn cached_selection_rechecks_binary() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("assign.so");
        std::fs::write(&bin, b"\x7fELF").unwrap();

        let reg = registry();
        let config = SelectorConfig {
            kernel_dir: Some(dir.path().to_path_buf()),
            require_binary: true,
            ..SelectorConfig::default()
        };
        let selector = KernelSelector::new(&reg, config);
        assert!(selector.config().require_binary);
        let df = DtypeFormat::U8_DEFAULT;

        selector.select("Assign", &[df, df], &[df]).unwrap();
        assert_eq!(selector.cache_len(), 1);

        std::fs::remove_file(&bin).unwrap();
        match selector.select("Assign", &[df, df], &[df]).unwrap_err() {
            SelectError::MissingBinary { path, .. } => assert_eq!(path, bin),
            other => panic!("expected MissingBinary, got {other:?}"),
        }
        assert_eq!(selector.cache_len(), 0);

        std::fs::write(&bin, b"\x7fELF").unwrap();
        assert_eq!(selector.select("Assign", &[df, df], &[df]).unwrap().binfile, bin);
    }

    #[test]
    fn concurrent_selection_shares_one_entry() {
        let reg = registry();
        let selector = KernelSelector::new(&reg, SelectorConfig::default());
        let df = DtypeFormat::I64_5HD;

        let picked: Vec<Arc<KernelBuildInfo>> = thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| selector.select("Assign", &[df, df], &[df]).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(picked.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(selector.cache_len(), 1);
    }

    #[test]
    fn other_ops_select_by_their_own_table() {
        let mut reg = registry();
        reg.register(
            TbeRegOp::new("Cast")
                .fusion_type(FusionType::Elemwise)
                .input(0, "x", false, ParamType::Required, "all")
                .output(0, "y", false, ParamType::Required, "all")
                .dtype_format(&[DtypeFormat::F16_DEFAULT, DtypeFormat::F32_DEFAULT])
                .dtype_format(&[DtypeFormat::F32_DEFAULT, DtypeFormat::F16_DEFAULT])
                .get_op_info()
                .unwrap(),
        )
        .unwrap();
        let selector = KernelSelector::new(&reg, SelectorConfig::default());

        let sel = selector.select("Cast", &[DtypeFormat::F32_DEFAULT], &[DtypeFormat::F16_DEFAULT]).unwrap();
        assert_eq!(sel.signature_index, 1);
        assert_eq!(sel.kernel_name, "cast");
        assert_eq!(sel.fusion_type, FusionType::Elemwise);
    }
}

use std::{
    collections::HashMap,
    sync::Arc,
};
use parking_lot::Mutex;

use core_types::DtypeFormat;

use crate::KernelBuildInfo;

/// Concrete request a selection was made for: op + dtypes/formats per port
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct KernelKey {
    pub op:    Arc<str>,
    pub t_in:  Vec<DtypeFormat>,
    pub t_out: Vec<DtypeFormat>,
}

/// Selected kernels, shared between callers asking for the same key.
#[derive(Default)]
pub(crate) struct KernelCache {
    map: Mutex<HashMap<KernelKey, Arc<KernelBuildInfo>>>,
}

impl KernelCache {
    pub fn get(&self, key: &KernelKey) -> Option<Arc<KernelBuildInfo>> {
        self.map.lock().get(key).cloned()
    }

    /// Insert unless another thread got there first; returns the stored entry
    pub fn insert(&self, key: KernelKey, info: KernelBuildInfo) -> Arc<KernelBuildInfo> {
        self.map.lock().entry(key).or_insert_with(|| Arc::new(info)).clone()
    }

    pub fn remove(&self, key: &KernelKey) {
        self.map.lock().remove(key);
    }

    pub fn len(&self) -> usize {
        self.map.lock().len()
    }

    pub fn clear(&self) {
        self.map.lock().clear();
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchKind;
    use std::path::PathBuf;
    use tbe_ops::FusionType;

    fn build(kernel: &str) -> KernelBuildInfo {
        KernelBuildInfo {
            op_name:         "Assign".into(),
            kernel_name:     kernel.into(),
            binfile:         PathBuf::from("assign.so"),
            fusion_type:     FusionType::Opaque,
            compute_cost:    10,
            signature_index: 0,
            inputs:          vec![DtypeFormat::I8_DEFAULT; 2],
            outputs:         vec![DtypeFormat::I8_DEFAULT],
            match_kind:      MatchKind::Exact,
        }
    }

    #[test]
    fn first_insert_wins() {
        let cache = KernelCache::default();
        let key = KernelKey {
            op:    Arc::from("Assign"),
            t_in:  vec![DtypeFormat::I8_DEFAULT; 2],
            t_out: vec![DtypeFormat::I8_DEFAULT],
        };

        let a = cache.insert(key.clone(), build("assign"));
        let b = cache.insert(key.clone(), build("other"));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(b.kernel_name, "assign");
        assert!(Arc::ptr_eq(&cache.get(&key).unwrap(), &a));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.get(&key).is_none());
    }
}

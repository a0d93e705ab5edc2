//! Runtime configuration for one harness run.

use std::path::PathBuf;

/// Configuration for a single bias-add dispatch.
///
/// The defaults reproduce the canonical run: 100 000 `f32` elements, the
/// `add` entry point compiled from `kernels/add.cl`.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Number of elements in each of the three buffers.
    pub array_size: usize,
    /// Path to the OpenCL C kernel source file.
    pub kernel_path: PathBuf,
    /// Entry-point name inside the compiled program.
    pub kernel_name: String,
    /// Maximum tolerated absolute deviation per element during verification.
    pub tolerance: f32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            array_size: 100_000,
            kernel_path: PathBuf::from("kernels/add.cl"),
            kernel_name: "add".to_string(),
            tolerance: 1e-3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_array_size() {
        let cfg = HarnessConfig::default();
        assert_eq!(cfg.array_size, 100_000);
    }

    #[test]
    fn default_kernel_path() {
        let cfg = HarnessConfig::default();
        assert_eq!(cfg.kernel_path, PathBuf::from("kernels/add.cl"));
    }

    #[test]
    fn default_kernel_name() {
        let cfg = HarnessConfig::default();
        assert_eq!(cfg.kernel_name, "add");
    }

    #[test]
    fn default_tolerance_is_tight() {
        let cfg = HarnessConfig::default();
        assert!(cfg.tolerance <= 1e-3);
        assert!(cfg.tolerance > 0.0);
    }

    #[test]
    fn custom_array_size() {
        let cfg = HarnessConfig {
            array_size: 4,
            ..Default::default()
        };
        assert_eq!(cfg.array_size, 4);
    }

    #[test]
    fn config_debug_impl() {
        let cfg = HarnessConfig::default();
        let dbg = format!("{cfg:?}");
        assert!(dbg.contains("HarnessConfig"));
    }
}

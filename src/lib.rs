//! Host-side OpenCL dispatch harness for a bias-add kernel.
//!
//! One run selects a device (GPU class, CPU fallback), compiles the `add`
//! entry point from `kernels/add.cl`, stages three `f32` buffers, launches
//! the kernel once over a one-dimensional work domain with queue profiling
//! enabled, reads the output back, and verifies it against a CPU
//! reference. Every acquired handle is owned by [`Runtime`] and released
//! exactly once, in dependency order, however the run ends.

pub mod buffer;
pub mod config;
pub mod device;
pub mod dispatch;
pub mod error;
pub mod program;
pub mod runtime;
pub mod timing;
pub mod verify;

pub use config::HarnessConfig;
pub use device::OpenClDevice;
pub use error::{HarnessError, Result};
pub use runtime::Runtime;
pub use timing::TimingSample;

//! Kernel source loading and program compilation.
//!
//! Compilation always starts from source text; there is no program cache.
//! A failed build surfaces the device build log inside the error so the
//! caller can print it verbatim.

use crate::device::OpenClDevice;
use crate::error::{HarnessError, Result};
use opencl3::context::Context;
use opencl3::program::Program;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the whole kernel source file into a host string.
///
/// Called before any context exists so a missing file is diagnosed without
/// touching the driver.
pub fn load_kernel_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| HarnessError::SourceFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Compile `source` for the context's device.
///
/// On build failure the device build log is fetched and returned inside
/// [`HarnessError::Compile`]; no kernel creation is attempted after that.
pub fn compile(context: &Context, device: &OpenClDevice, source: &str) -> Result<Program> {
    let mut program =
        Program::create_from_source(context, source).map_err(|e| HarnessError::Compile {
            log: format!("program creation failed: {e}"),
        })?;

    if let Err(e) = program.build(&[device.device.id()], "") {
        let log = program
            .get_build_log(device.device.id())
            .unwrap_or_else(|_| format!("build log unavailable ({e})"));
        return Err(HarnessError::Compile { log });
    }

    debug!("kernel program compiled from {} bytes of source", source.len());
    Ok(program)
}

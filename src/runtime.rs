//! The owning bundle of every OpenCL handle a run acquires.

use crate::buffer::DeviceBuffer;
use crate::config::HarnessConfig;
use crate::device::OpenClDevice;
use crate::error::{HarnessError, Result};
use crate::program;
use opencl3::command_queue::{CommandQueue, CL_QUEUE_PROFILING_ENABLE};
use opencl3::context::Context;
use opencl3::kernel::Kernel;
use opencl3::program::Program;
use tracing::debug;

/// All handles of one run, released exactly once on drop.
///
/// Field order is load-bearing: fields drop top to bottom, which releases
/// kernel → input → bias → output → queue → program → context. The device
/// is referenced, not owned, and is never released.
pub struct Runtime {
    pub(crate) kernel: Kernel,
    pub(crate) input: DeviceBuffer<f32>,
    pub(crate) bias: DeviceBuffer<f32>,
    pub(crate) output: DeviceBuffer<f32>,
    pub(crate) queue: CommandQueue,
    #[allow(dead_code)]
    pub(crate) program: Program,
    #[allow(dead_code)]
    pub(crate) context: Context,
    pub(crate) device: OpenClDevice,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("device", &self.device.device_name)
            .field("platform", &self.device.platform_name)
            .field("elements", &self.input.len)
            .finish()
    }
}

impl Runtime {
    /// Stage every resource for one run.
    ///
    /// Construction is incremental; a failure at any stage early-returns
    /// and drops only the handles acquired so far. The kernel source file
    /// is read before the context is created, so a missing file never
    /// touches the driver.
    pub fn create(config: &HarnessConfig, input: &[f32], bias: &[f32]) -> Result<Runtime> {
        let device = OpenClDevice::select()?;

        let source = program::load_kernel_source(&config.kernel_path)?;

        let context = Context::from_device(&device.device).map_err(|e| HarnessError::Context {
            reason: e.to_string(),
        })?;

        let compiled = program::compile(&context, &device, &source)?;

        let queue = CommandQueue::create_default_with_properties(
            &context,
            CL_QUEUE_PROFILING_ENABLE,
            0,
        )
        .map_err(|e| HarnessError::Queue {
            reason: e.to_string(),
        })?;

        let kernel =
            Kernel::create(&compiled, &config.kernel_name).map_err(|e| HarnessError::KernelCreate {
                name: config.kernel_name.clone(),
                reason: e.to_string(),
            })?;

        let input_buffer = DeviceBuffer::from_host(&context, input)?;
        let bias_buffer = DeviceBuffer::from_host(&context, bias)?;
        let output_buffer = DeviceBuffer::write_only(&context, config.array_size)?;

        debug!(
            "runtime staged: kernel '{}' with {} work-items on {}",
            config.kernel_name, config.array_size, device.device_name
        );

        Ok(Runtime {
            kernel,
            input: input_buffer,
            bias: bias_buffer,
            output: output_buffer,
            queue,
            program: compiled,
            context,
            device,
        })
    }

    /// Name of the selected device, for reporting.
    pub fn device_name(&self) -> &str {
        &self.device.device_name
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        // Handles release themselves field by field after this.
        debug!("releasing OpenCL handles for {}", self.device.device_name);
    }
}

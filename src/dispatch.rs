//! Kernel argument binding, enqueue, and timed execution.

use crate::error::{HarnessError, Result};
use crate::runtime::Runtime;
use crate::timing::TimingSample;
use opencl3::event::Event;
use opencl3::types::cl_uint;
use std::ptr;
use tracing::debug;

/// Execute one bias-add dispatch over the bundle's work domain.
///
/// Binds the three buffers as arguments 0, 1, 2 (each binding checked on
/// its own), enqueues the kernel over a one-dimensional domain of one
/// work-item per element with a completion event, blocks until the event
/// fires, reads the profiling counters, then blocking-reads the output
/// and drains the queue.
pub fn run(rt: &Runtime) -> Result<(Vec<f32>, TimingSample)> {
    for (index, buffer) in [&rt.input, &rt.bias, &rt.output].into_iter().enumerate() {
        unsafe {
            rt.kernel
                .set_arg(index as cl_uint, &buffer.raw())
                .map_err(|e| HarnessError::ArgBind {
                    index,
                    reason: e.to_string(),
                })?;
        }
    }

    let global_work_size: [usize; 1] = [rt.output.len];
    let event = unsafe {
        rt.queue
            .enqueue_nd_range_kernel(
                rt.kernel.get(),
                1,
                ptr::null(),
                global_work_size.as_ptr(),
                ptr::null(),
                &[],
            )
            .map_err(|e| HarnessError::Enqueue {
                reason: e.to_string(),
            })?
    };

    event.wait().map_err(|e| HarnessError::Wait {
        reason: e.to_string(),
    })?;

    let timing = read_timing(&event)?;
    debug!("device timing: {}", timing);

    let mut output = vec![0.0f32; rt.output.len];
    rt.output.read_into(&rt.queue, &mut output)?;

    rt.queue.finish().map_err(|e| HarnessError::QueueDrain {
        reason: e.to_string(),
    })?;

    Ok((output, timing))
}

/// Read the four profiling counters from a completed event.
fn read_timing(event: &Event) -> Result<TimingSample> {
    let queued_ns = event
        .profiling_command_queued()
        .map_err(|e| HarnessError::Profile {
            counter: "queued",
            reason: e.to_string(),
        })?;
    let submitted_ns = event
        .profiling_command_submit()
        .map_err(|e| HarnessError::Profile {
            counter: "submit",
            reason: e.to_string(),
        })?;
    let start_ns = event
        .profiling_command_start()
        .map_err(|e| HarnessError::Profile {
            counter: "start",
            reason: e.to_string(),
        })?;
    let end_ns = event
        .profiling_command_end()
        .map_err(|e| HarnessError::Profile {
            counter: "end",
            reason: e.to_string(),
        })?;

    Ok(TimingSample {
        queued_ns,
        submitted_ns,
        start_ns,
        end_ns,
    })
}

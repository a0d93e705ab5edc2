//! Typed device buffers.
//!
//! Input-side buffers are created read-only with a creation-time host copy
//! (`CL_MEM_COPY_HOST_PTR`), so no separate write enqueue is needed. The
//! output buffer is write-only on the device and read back with a blocking
//! transfer.

use crate::error::{HarnessError, Result};
use opencl3::context::Context;
use opencl3::command_queue::CommandQueue;
use opencl3::memory::{
    Buffer, ClMem, CL_MEM_COPY_HOST_PTR, CL_MEM_READ_ONLY, CL_MEM_WRITE_ONLY,
};
use opencl3::types::{cl_mem, CL_BLOCKING};
use tracing::debug;

/// Bytes required for `count` elements of `T`, with overflow checked.
pub fn buffer_bytes<T>(count: usize) -> Result<usize> {
    count
        .checked_mul(std::mem::size_of::<T>())
        .ok_or_else(|| HarnessError::BufferCreation {
            size_bytes: usize::MAX,
            reason: format!("byte size overflow: {count} elements"),
        })
}

/// A device-resident memory region of `len` elements of `T`.
pub struct DeviceBuffer<T: Copy + 'static> {
    /// The underlying opencl3 buffer.
    pub(crate) inner: Buffer<T>,
    /// Number of elements.
    pub len: usize,
}

impl<T: Copy + 'static> std::fmt::Debug for DeviceBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceBuffer")
            .field("len", &self.len)
            .field("bytes", &(self.len * std::mem::size_of::<T>()))
            .finish()
    }
}

impl<T: Copy + 'static> DeviceBuffer<T> {
    /// Create a read-only buffer initialised by copying `data` at creation.
    pub fn from_host(context: &Context, data: &[T]) -> Result<Self> {
        let byte_size = buffer_bytes::<T>(data.len())?;
        let inner = unsafe {
            Buffer::<T>::create(
                context,
                CL_MEM_READ_ONLY | CL_MEM_COPY_HOST_PTR,
                data.len(),
                data.as_ptr() as *mut std::ffi::c_void,
            )
            .map_err(|e| HarnessError::BufferCreation {
                size_bytes: byte_size,
                reason: e.to_string(),
            })?
        };
        debug!("read-only buffer created: {} elems, {} bytes", data.len(), byte_size);
        Ok(Self {
            inner,
            len: data.len(),
        })
    }

    /// Create a write-only buffer of `len` uninitialised elements.
    pub fn write_only(context: &Context, len: usize) -> Result<Self> {
        let byte_size = buffer_bytes::<T>(len)?;
        let inner = unsafe {
            Buffer::<T>::create(context, CL_MEM_WRITE_ONLY, len, std::ptr::null_mut()).map_err(
                |e| HarnessError::BufferCreation {
                    size_bytes: byte_size,
                    reason: e.to_string(),
                },
            )?
        };
        debug!("write-only buffer created: {} elems, {} bytes", len, byte_size);
        Ok(Self { inner, len })
    }

    /// Blocking read of the whole buffer into `dst`.
    pub fn read_into(&self, queue: &CommandQueue, dst: &mut [T]) -> Result<()> {
        if dst.len() != self.len {
            return Err(HarnessError::ReadBack {
                reason: format!(
                    "destination length {} does not match buffer length {}",
                    dst.len(),
                    self.len
                ),
            });
        }
        unsafe {
            queue
                .enqueue_read_buffer(&self.inner, CL_BLOCKING, 0, dst, &[])
                .map_err(|e| HarnessError::ReadBack {
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }

    /// Raw memory handle for kernel argument binding.
    pub(crate) fn raw(&self) -> cl_mem {
        self.inner.get()
    }
}

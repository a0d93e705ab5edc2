//! Device enumeration and selection.

use crate::error::{HarnessError, Result};
use opencl3::device::{Device, CL_DEVICE_TYPE_CPU, CL_DEVICE_TYPE_GPU};
use opencl3::platform::get_platforms;
use tracing::{debug, info};

/// The device one run dispatches to.
///
/// The handle is referenced, never released: platforms own their devices
/// for the process lifetime, so there is nothing to tear down here.
#[derive(Debug)]
pub struct OpenClDevice {
    pub(crate) device: Device,
    /// Device name as reported by the driver.
    pub device_name: String,
    /// Name of the platform the device was found on.
    pub platform_name: String,
    /// Vendor string as reported by the driver.
    pub vendor: String,
}

impl OpenClDevice {
    /// Select one device from the first available platform.
    ///
    /// Prefers a GPU-class device and falls back to a CPU-class one when
    /// the platform reports none.
    pub fn select() -> Result<OpenClDevice> {
        let platforms = get_platforms().map_err(|e| HarnessError::Platform {
            reason: e.to_string(),
        })?;

        let platform = *platforms.first().ok_or(HarnessError::NoPlatform)?;
        let platform_name = platform.name().unwrap_or_default();
        debug!("using OpenCL platform: {}", platform_name);

        let gpu_ids = platform
            .get_devices(CL_DEVICE_TYPE_GPU)
            .unwrap_or_default();

        let device_id = match gpu_ids.first() {
            Some(&id) => id,
            None => {
                debug!("no GPU-class device, falling back to CPU class");
                let cpu_ids = platform
                    .get_devices(CL_DEVICE_TYPE_CPU)
                    .unwrap_or_default();
                *cpu_ids.first().ok_or_else(|| HarnessError::NoDevice {
                    reason: format!(
                        "platform '{platform_name}' exposes no GPU-class or CPU-class device"
                    ),
                })?
            }
        };

        let device = Device::new(device_id);
        let device_name = device.name().unwrap_or_default();
        let vendor = device.vendor().unwrap_or_default();
        info!(
            "selected OpenCL device: {} (vendor: {}) on {}",
            device_name, vendor, platform_name
        );

        Ok(OpenClDevice {
            device,
            device_name,
            platform_name,
            vendor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_is_graceful_without_hardware() {
        match OpenClDevice::select() {
            Ok(dev) => {
                // Names come from the driver; only the handle is load-bearing.
                let _ = (dev.device_name, dev.platform_name, dev.vendor);
            }
            Err(e) => {
                assert!(matches!(
                    e,
                    HarnessError::NoPlatform
                        | HarnessError::Platform { .. }
                        | HarnessError::NoDevice { .. }
                ));
            }
        }
    }

    #[test]
    fn no_device_error_names_the_platform() {
        let e = HarnessError::NoDevice {
            reason: "platform 'Clover' exposes no GPU-class or CPU-class device".into(),
        };
        assert!(e.to_string().contains("Clover"));
    }
}

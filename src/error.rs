//! Error types for the dispatch harness.
//!
//! Every fallible OpenCL call is checked immediately and mapped to one of
//! these variants. All of them are unrecoverable for the current run; the
//! binary's top-level handler is the only place that terminates the process.

use std::path::PathBuf;

/// Errors from device discovery, program compilation, dispatch, and
/// result verification.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// No OpenCL platform is available on this host.
    #[error("no OpenCL platform available")]
    NoPlatform,

    /// The platform query itself failed.
    #[error("OpenCL platform query failed: {reason}")]
    Platform { reason: String },

    /// Neither a GPU-class nor a CPU-class device was found.
    #[error("no suitable OpenCL device: {reason}")]
    NoDevice { reason: String },

    /// Context creation for the selected device failed.
    #[error("context creation failed: {reason}")]
    Context { reason: String },

    /// The kernel source file could not be read.
    #[error("kernel source '{}' could not be read: {source}", path.display())]
    SourceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Program compilation failed; `log` carries the device build log.
    #[error("kernel compilation failed:\n{log}")]
    Compile { log: String },

    /// Command queue creation failed.
    #[error("command queue creation failed: {reason}")]
    Queue { reason: String },

    /// The named entry point could not be extracted from the program.
    #[error("kernel '{name}' creation failed: {reason}")]
    KernelCreate { name: String, reason: String },

    /// Device buffer allocation failed.
    #[error("buffer allocation ({size_bytes} bytes) failed: {reason}")]
    BufferCreation { size_bytes: usize, reason: String },

    /// Binding a buffer as a kernel argument failed.
    #[error("kernel argument {index} binding failed: {reason}")]
    ArgBind { index: usize, reason: String },

    /// Kernel submission to the command queue failed.
    #[error("kernel enqueue failed: {reason}")]
    Enqueue { reason: String },

    /// Blocking on the completion event failed.
    #[error("waiting on completion event failed: {reason}")]
    Wait { reason: String },

    /// A profiling counter could not be read from the completion event.
    #[error("profiling counter '{counter}' unavailable: {reason}")]
    Profile {
        counter: &'static str,
        reason: String,
    },

    /// Reading the output buffer back to host memory failed.
    #[error("output read-back failed: {reason}")]
    ReadBack { reason: String },

    /// Draining the command queue failed.
    #[error("queue drain failed: {reason}")]
    QueueDrain { reason: String },

    /// The device output deviated from the CPU reference.
    #[error("verification failed at index {index}: expected {expected}, device produced {actual}")]
    Verification {
        index: usize,
        expected: f32,
        actual: f32,
    },
}

/// Convenience result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_platform() {
        let e = HarnessError::NoPlatform;
        assert_eq!(e.to_string(), "no OpenCL platform available");
    }

    #[test]
    fn display_source_file_includes_path() {
        let e = HarnessError::SourceFile {
            path: PathBuf::from("kernels/add.cl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let s = e.to_string();
        assert!(s.contains("kernels/add.cl"));
        assert!(s.contains("missing"));
    }

    #[test]
    fn display_compile_carries_build_log() {
        let e = HarnessError::Compile {
            log: "add.cl:3:5: error: use of undeclared identifier".into(),
        };
        assert!(e.to_string().contains("undeclared identifier"));
    }

    #[test]
    fn display_arg_bind_names_index() {
        let e = HarnessError::ArgBind {
            index: 2,
            reason: "CL_INVALID_MEM_OBJECT".into(),
        };
        let s = e.to_string();
        assert!(s.contains("argument 2"));
        assert!(s.contains("CL_INVALID_MEM_OBJECT"));
    }

    #[test]
    fn display_verification_reports_both_values() {
        let e = HarnessError::Verification {
            index: 17,
            expected: 10_017.0,
            actual: 0.0,
        };
        let s = e.to_string();
        assert!(s.contains("index 17"));
        assert!(s.contains("10017"));
        assert!(s.contains('0'));
    }

    #[test]
    fn source_file_exposes_io_source() {
        let e = HarnessError::SourceFile {
            path: PathBuf::from("x.cl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let src = std::error::Error::source(&e);
        assert!(src.is_some());
    }
}

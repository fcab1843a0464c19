//! Compute device selection.
//!
//! Backends are checked in priority order and the first available one wins.
//! Nothing is cached, so every call repeats the probe.

use crate::storage::config::Settings;
use candle_core::Device;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compute backend kinds
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// NVIDIA CUDA GPU
    Cuda,
    /// Apple Metal
    Metal,
    /// General-purpose CPU, always available
    Cpu,
}

impl Backend {
    /// Accelerators first, CPU last
    pub const DEFAULT_ORDER: [Backend; 3] = [Backend::Cuda, Backend::Metal, Backend::Cpu];

    pub fn name(&self) -> &'static str {
        match self {
            Backend::Cuda => "cuda",
            Backend::Metal => "metal",
            Backend::Cpu => "cpu",
        }
    }

    /// Build a device for this backend on ordinal 0
    pub fn create(&self) -> candle_core::Result<Device> {
        match self {
            Backend::Cuda => Device::new_cuda(0),
            Backend::Metal => Device::new_metal(0),
            Backend::Cpu => Ok(Device::Cpu),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Answers whether a backend can be used right now
pub trait BackendProbe {
    fn is_available(&self, backend: Backend) -> bool;
}

/// Probes through candle's capability checks without building a device
///
/// A backend compiled in but missing at runtime passes the probe and then
/// fails in [`device_for`], which falls back to CPU.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandleProbe;

impl BackendProbe for CandleProbe {
    fn is_available(&self, backend: Backend) -> bool {
        let available = match backend {
            Backend::Cuda => candle_core::utils::cuda_is_available(),
            Backend::Metal => candle_core::utils::metal_is_available(),
            Backend::Cpu => true,
        };
        if !available {
            log::debug!("{} not available", backend);
        }
        available
    }
}

/// First backend in `order` that `probe` reports available, else CPU
pub fn select_device<P: BackendProbe + ?Sized>(order: &[Backend], probe: &P) -> Backend {
    order
        .iter()
        .copied()
        .find(|backend| *backend == Backend::Cpu || probe.is_available(*backend))
        .unwrap_or(Backend::Cpu)
}

/// Build the device for the first available backend in `order`.
///
/// Falls back to [`Device::Cpu`] if the chosen backend fails to initialize
/// after probing.
pub fn device_for<P: BackendProbe + ?Sized>(order: &[Backend], probe: &P) -> Device {
    let backend = select_device(order, probe);
    match backend.create() {
        Ok(device) => {
            log::info!("Using {} device", backend);
            device
        }
        Err(e) => {
            log::warn!("Failed to initialize {} device, using cpu: {}", backend, e);
            Device::Cpu
        }
    }
}

/// Probe CUDA, then Metal, then fall back to CPU
pub fn get_device() -> Device {
    device_for(&Backend::DEFAULT_ORDER, &CandleProbe)
}

/// Build the device for the order configured in `settings`
pub fn device_from_settings(settings: &Settings) -> Device {
    device_for(&settings.device_order, &CandleProbe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeProbe {
        available: Vec<Backend>,
        probed: RefCell<Vec<Backend>>,
    }

    impl FakeProbe {
        fn with(available: &[Backend]) -> Self {
            Self {
                available: available.to_vec(),
                probed: RefCell::new(Vec::new()),
            }
        }
    }

    impl BackendProbe for FakeProbe {
        fn is_available(&self, backend: Backend) -> bool {
            self.probed.borrow_mut().push(backend);
            self.available.contains(&backend)
        }
    }

    #[test]
    fn test_select_device_prefers_cuda() {
        let probe = FakeProbe::with(&[Backend::Cuda, Backend::Metal]);
        assert_eq!(
            select_device(&Backend::DEFAULT_ORDER, &probe),
            Backend::Cuda
        );
        assert_eq!(*probe.probed.borrow(), vec![Backend::Cuda]);
    }

    #[test]
    fn test_select_device_falls_through_to_metal() {
        let probe = FakeProbe::with(&[Backend::Metal]);
        assert_eq!(
            select_device(&Backend::DEFAULT_ORDER, &probe),
            Backend::Metal
        );
        assert_eq!(*probe.probed.borrow(), vec![Backend::Cuda, Backend::Metal]);
    }

    #[test]
    fn test_select_device_cpu_fallback() {
        let probe = FakeProbe::with(&[]);
        assert_eq!(select_device(&Backend::DEFAULT_ORDER, &probe), Backend::Cpu);
        assert_eq!(select_device(&[], &probe), Backend::Cpu);
        assert_eq!(select_device(&[Backend::Cuda], &probe), Backend::Cpu);
    }

    #[test]
    fn test_select_device_custom_order() {
        let probe = FakeProbe::with(&[Backend::Cuda, Backend::Metal]);
        assert_eq!(
            select_device(&[Backend::Metal, Backend::Cuda], &probe),
            Backend::Metal
        );
    }

    #[test]
    fn test_select_device_reprobes_every_call() {
        let probe = FakeProbe::with(&[]);
        select_device(&Backend::DEFAULT_ORDER, &probe);
        select_device(&Backend::DEFAULT_ORDER, &probe);
        assert_eq!(probe.probed.borrow().len(), 4);
    }

    #[test]
    fn test_device_for_cpu() {
        let device = device_for(&[Backend::Cpu], &FakeProbe::with(&[]));
        assert!(device.is_cpu());
    }

    #[cfg(not(any(feature = "cuda", feature = "metal")))]
    #[test]
    fn test_get_device_without_accelerators() {
        assert!(get_device().is_cpu());
        assert!(!CandleProbe.is_available(Backend::Cuda));
        assert!(CandleProbe.is_available(Backend::Cpu));
    }

    struct AlwaysAvailable;

    impl BackendProbe for AlwaysAvailable {
        fn is_available(&self, _backend: Backend) -> bool {
            true
        }
    }

    #[cfg(not(any(feature = "cuda", feature = "metal")))]
    #[test]
    fn test_device_for_falls_back_to_cpu_when_init_fails() {
        assert_eq!(
            select_device(&Backend::DEFAULT_ORDER, &AlwaysAvailable),
            Backend::Cuda
        );
        let device = device_for(&Backend::DEFAULT_ORDER, &AlwaysAvailable);
        assert!(device.is_cpu());

        let device = device_for(&[Backend::Metal], &AlwaysAvailable);
        assert!(device.is_cpu());
    }

    #[cfg(not(any(feature = "cuda", feature = "metal")))]
    #[test]
    fn test_device_from_settings() {
        let settings = Settings {
            device_order: vec![Backend::Metal, Backend::Cpu],
            ..Settings::default()
        };
        assert!(device_from_settings(&settings).is_cpu());
        assert_eq!(
            select_device(&settings.device_order, &CandleProbe),
            Backend::Cpu
        );
    }

    #[test]
    fn test_backend_serde_names() {
        assert_eq!(Backend::Cuda.to_string(), "cuda");
        assert_eq!(Backend::Metal.name(), "metal");
        let json = serde_json::to_string(&Backend::DEFAULT_ORDER).unwrap();
        assert_eq!(json, r#"["cuda","metal","cpu"]"#);
    }
}

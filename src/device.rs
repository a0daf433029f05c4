//! CPAL device discovery and sink creation.
//!
//! This module provides [`CpalDevice`] for opening the system's default
//! audio output.
//!
//! # Example
//!
//! ```no_run
//! use soundial::{CpalDevice, SynthEngine};
//!
//! if let Some(device) = CpalDevice::default_output() {
//!     println!("{} ({} Hz, {} ch)",
//!         device.name(), device.sample_rate(), device.channels());
//!     let engine = SynthEngine::with_sink(device.sample_rate(), device.create_sink());
//! }
//! ```

use cpal::traits::{DeviceTrait, HostTrait};
use tracing::info;

use crate::nodes::CpalSink;

/// A discovered audio output device.
pub struct CpalDevice {
    device: cpal::Device,
    config: cpal::SupportedStreamConfig,
    name: String,
    sample_rate: u32,
    channels: u16,
}

impl CpalDevice {
    /// Get the default output device, or `None` when the host has no output.
    pub fn default_output() -> Option<Self> {
        let host = cpal::default_host();
        let device = host.default_output_device()?;
        let config = device.default_output_config().ok()?;
        let name = device.name().unwrap_or_else(|_| "Unknown".into());

        info!(
            device = %name,
            sample_rate = config.sample_rate().0,
            channels = config.channels(),
            "opened default audio output"
        );

        Some(Self {
            sample_rate: config.sample_rate().0,
            channels: config.channels(),
            name,
            device,
            config,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Create a sink node that outputs to this device.
    pub fn create_sink(&self) -> CpalSink {
        CpalSink::new(&self.device, &self.config)
    }
}

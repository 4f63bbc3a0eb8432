//! Host-based tests for the XIAO UVC webcam
//! These tests run on the development machine, not on the ESP32

use webcam_core::config::{OtaConfig, StreamConfig};
use webcam_core::testing::{FakeFlash, FakeSensor, RecordingIndicator};
use webcam_core::{OtaUploadService, UvcStreamingBridge};

pub type TestBridge = UvcStreamingBridge<FakeSensor, RecordingIndicator>;

/// Streaming bridge wired to a fake sensor with default stream settings.
pub fn bridge_with(sensor: FakeSensor) -> TestBridge {
    UvcStreamingBridge::new(sensor, RecordingIndicator::default(), StreamConfig::default())
}

/// Upload service with the firmware's 2 KiB chunking.
pub fn ota_service() -> OtaUploadService<FakeFlash> {
    OtaUploadService::new(FakeFlash::new(), OtaConfig::default())
}

/// Deterministic pseudo-firmware image.
pub fn firmware_image(len: usize) -> Vec<u8> {
    let mut image: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
    if let Some(magic) = image.first_mut() {
        *magic = 0xE9;
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firmware_image_starts_with_esp_magic() {
        let image = firmware_image(16);
        assert_eq!(image.len(), 16);
        assert_eq!(image[0], 0xE9);
    }

    #[test]
    fn default_settings_validate() {
        assert!(webcam_core::DeviceConfig::default().validate().is_ok());
    }
}

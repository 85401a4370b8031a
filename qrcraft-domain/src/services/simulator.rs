use std::sync::Arc;

use crate::entities::ScanEvent;
use crate::ports::{Clock, RandomSource};
use crate::value_objects::Device;

/// Mobile holds three of the five slots.
pub const DEVICE_POOL: [Device; 5] = [
    Device::Mobile,
    Device::Mobile,
    Device::Mobile,
    Device::Desktop,
    Device::Tablet,
];

pub const LOCATION_POOL: [&str; 10] = [
    "San Francisco, US",
    "London, UK",
    "Tokyo, JP",
    "Berlin, DE",
    "Paris, FR",
    "Sydney, AU",
    "Toronto, CA",
    "Mumbai, IN",
    "Singapore, SG",
    "Dubai, AE",
];

/// Produces synthetic scan events. Never touches the history itself; the
/// caller hands the event to the store.
pub struct ScanSimulator {
    random: Box<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl ScanSimulator {
    pub fn new(random: Box<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self { random, clock }
    }

    pub fn simulate(&mut self, device_override: Option<Device>) -> ScanEvent {
        let device = match device_override {
            Some(device) => device,
            None => DEVICE_POOL[self.pick(DEVICE_POOL.len())],
        };
        let location = LOCATION_POOL[self.pick(LOCATION_POOL.len())];
        ScanEvent::new(self.clock.now_millis(), device, location)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random.next_index(len) % len
    }
}

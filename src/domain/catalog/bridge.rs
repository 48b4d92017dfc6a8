//! Bridge: remote controls and devices vary independently.

pub trait Device {
    fn turn_on(&mut self) -> String;
    fn turn_off(&mut self) -> String;
    fn is_on(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct Tv {
    on: bool,
}

impl Device for Tv {
    fn turn_on(&mut self) -> String {
        self.on = true;
        "TV turned on".to_string()
    }

    fn turn_off(&mut self) -> String {
        self.on = false;
        "TV turned off".to_string()
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Abstraction side of the bridge.
pub trait RemoteControl {
    fn turn_on(&mut self) -> String;
    fn turn_off(&mut self) -> String;
}

#[derive(Debug)]
pub struct TvRemoteControl<D: Device> {
    device: D,
}

impl<D: Device> TvRemoteControl<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}

impl<D: Device> RemoteControl for TvRemoteControl<D> {
    fn turn_on(&mut self) -> String {
        self.device.turn_on()
    }

    fn turn_off(&mut self) -> String {
        self.device.turn_off()
    }
}

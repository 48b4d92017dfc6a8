//! Builder: a director drives a step-wise builder to assemble a computer.

use std::fmt;

/// Product assembled by a [`ComputerBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Computer {
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub gpu: String,
    pub has_bluetooth: bool,
    pub has_wifi: bool,
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU: {}, RAM: {}, Storage: {}, GPU: {}, Bluetooth: {}, WiFi: {}",
            self.cpu,
            self.ram,
            self.storage,
            self.gpu,
            bool_label(self.has_bluetooth),
            bool_label(self.has_wifi)
        )
    }
}

fn bool_label(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

/// One method per part of the product.
pub trait ComputerBuilder {
    fn build_cpu(&mut self);
    fn build_ram(&mut self);
    fn build_storage(&mut self);
    fn build_gpu(&mut self);
    fn build_bluetooth(&mut self);
    fn build_wifi(&mut self);
    fn computer(&self) -> Computer;
}

#[derive(Debug, Default)]
pub struct GamingComputerBuilder {
    computer: Computer,
}

impl GamingComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComputerBuilder for GamingComputerBuilder {
    fn build_cpu(&mut self) {
        self.computer.cpu = "Intel i9".into();
    }

    fn build_ram(&mut self) {
        self.computer.ram = "32GB".into();
    }

    fn build_storage(&mut self) {
        self.computer.storage = "1TB SSD".into();
    }

    fn build_gpu(&mut self) {
        self.computer.gpu = "NVIDIA RTX 3080".into();
    }

    fn build_bluetooth(&mut self) {
        self.computer.has_bluetooth = true;
    }

    fn build_wifi(&mut self) {
        self.computer.has_wifi = true;
    }

    fn computer(&self) -> Computer {
        self.computer.clone()
    }
}

/// Fixes the order in which parts get built.
pub struct Director<'a, B: ComputerBuilder> {
    builder: &'a mut B,
}

impl<'a, B: ComputerBuilder> Director<'a, B> {
    pub fn new(builder: &'a mut B) -> Self {
        Self { builder }
    }

    pub fn construct(&mut self) {
        self.builder.build_cpu();
        self.builder.build_ram();
        self.builder.build_storage();
        self.builder.build_gpu();
        self.builder.build_bluetooth();
        self.builder.build_wifi();
    }
}

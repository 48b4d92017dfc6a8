//! Adapter: exposes a legacy type through the interface clients expect.

pub trait Target {
    fn request(&self) -> Vec<String>;
}

/// Existing type with an incompatible method name.
#[derive(Debug, Default)]
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        "Called SpecificRequest()".to_string()
    }
}

#[derive(Debug)]
pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> Vec<String> {
        vec![self.adaptee.specific_request()]
    }
}

//! Proxy: defers creating the real subject until the first request.

use std::cell::OnceCell;

use tracing::debug;

pub trait Subject {
    fn request(&self) -> String;
}

#[derive(Debug)]
pub struct RealSubject;

impl Subject for RealSubject {
    fn request(&self) -> String {
        "RealSubject Request()".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Proxy {
    real: OnceCell<RealSubject>,
}

impl Proxy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the real subject has been created yet.
    pub fn is_initialized(&self) -> bool {
        self.real.get().is_some()
    }
}

impl Subject for Proxy {
    fn request(&self) -> String {
        self.real
            .get_or_init(|| {
                debug!("creating real subject");
                RealSubject
            })
            .request()
    }
}

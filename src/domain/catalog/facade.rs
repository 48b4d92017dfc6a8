//! Facade: one entry point in front of two subsystems.

#[derive(Debug, Default)]
pub struct SubsystemA;

impl SubsystemA {
    pub fn operation_a(&self) -> String {
        "Operation A".to_string()
    }
}

#[derive(Debug, Default)]
pub struct SubsystemB;

impl SubsystemB {
    pub fn operation_b(&self) -> String {
        "Operation B".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Facade {
    subsystem_a: SubsystemA,
    subsystem_b: SubsystemB,
}

impl Facade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operation(&self) -> Vec<String> {
        vec![self.subsystem_a.operation_a(), self.subsystem_b.operation_b()]
    }
}

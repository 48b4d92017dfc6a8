//! Names of the patterns in the catalog.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::application::ApplicationError;

/// Every demonstrable pattern, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Pattern {
    Builder,
    CopyConstructor,
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Facade,
    Flyweight,
    Proxy,
}

impl Pattern {
    pub const ALL: [Pattern; 9] = [
        Pattern::Builder,
        Pattern::CopyConstructor,
        Pattern::Adapter,
        Pattern::Bridge,
        Pattern::Composite,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::Flyweight,
        Pattern::Proxy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Builder => "builder",
            Pattern::CopyConstructor => "copy-constructor",
            Pattern::Adapter => "adapter",
            Pattern::Bridge => "bridge",
            Pattern::Composite => "composite",
            Pattern::Decorator => "decorator",
            Pattern::Facade => "facade",
            Pattern::Flyweight => "flyweight",
            Pattern::Proxy => "proxy",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Pattern::Builder => "assemble a product step by step under a director",
            Pattern::CopyConstructor => "create an independent copy of an existing object",
            Pattern::Adapter => "expose an incompatible type through the expected interface",
            Pattern::Bridge => "vary an abstraction and its implementation independently",
            Pattern::Composite => "treat leaves and containers of a tree uniformly",
            Pattern::Decorator => "attach responsibilities to an object dynamically",
            Pattern::Facade => "one simple entry point in front of several subsystems",
            Pattern::Flyweight => "share one instance per key instead of allocating per use",
            Pattern::Proxy => "stand in for an object and create it lazily",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| ApplicationError::UnknownPattern(s.to_string()))
    }
}

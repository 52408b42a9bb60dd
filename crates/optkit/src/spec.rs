use std::fmt;
use std::hash::{Hash, Hasher};

use crate::trigger::Trigger;

/// An option definition: a trigger plus the exact number of parameters that
/// must follow it.
///
/// Identity is `(trigger, parameter count)`. The help text is descriptive only
/// and takes no part in equality, hashing or matching.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    trigger: Trigger,
    parameters: usize,
    help: String,
}

impl OptionSpec {
    /// A zero-parameter option with no help text.
    pub fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            parameters: 0,
            help: String::new(),
        }
    }

    /// Require exactly `count` parameters after the trigger.
    pub fn with_parameters(mut self, count: usize) -> Self {
        self.parameters = count;
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn required_parameters(&self) -> usize {
        self.parameters
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn matches(&self, token: &str) -> bool {
        self.trigger.matches(token)
    }

    fn key(&self) -> (&Trigger, usize) {
        (&self.trigger, self.parameters)
    }
}

impl PartialEq for OptionSpec {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OptionSpec {}

impl Hash for OptionSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.trigger, f)
    }
}

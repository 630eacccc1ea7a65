//! # Membership Slots
//!
//! A node of a fuzzy cognitive map owns two membership functions: one used
//! to fuzzify incoming values and one used to defuzzify its activation.
//! [`MembershipSlots`] holds that pair and forwards raw parameter strings to
//! the right function.
//!
//! ```rust
//! use fcm_membership::{MembershipSlots, Slot};
//!
//! let mut slots = MembershipSlots::new();
//! slots.configure(Slot::Input, &["0;0 10;1"]).unwrap();
//!
//! assert_eq!(slots.fuzzify(5.0), 0.5);
//! assert_eq!(slots.defuzzify(0.5), 0.5); // unconfigured: passed through
//! ```

pub mod config;

use std::{fmt, str::FromStr};

use log::debug;
use thiserror::Error;

use crate::function::{FunctionError, MembershipFunction, SisoFunction};

pub use config::{ConfigError, MembershipConfig, SlotConfig};

/// Which of a node's two membership functions to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Fuzzification of incoming values.
    Input,
    /// Defuzzification of the activation value.
    Output,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Input, Slot::Output];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Input => write!(f, "input"),
            Slot::Output => write!(f, "output"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotParseError {
    #[error("Invalid Slot: {0}")]
    InvalidValue(String),
}

impl FromStr for Slot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "input" => Ok(Slot::Input),
            "output" => Ok(Slot::Output),
            _ => Err(SlotParseError::InvalidValue(s.to_string())),
        }
    }
}

/// The input and output membership functions of one node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembershipSlots {
    input: MembershipFunction,
    output: MembershipFunction,
}

impl MembershipSlots {
    /// Two unconfigured piecewise linear slots.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(input: MembershipFunction, output: MembershipFunction) -> Self {
        MembershipSlots { input, output }
    }

    pub fn slot(&self, slot: Slot) -> &MembershipFunction {
        match slot {
            Slot::Input => &self.input,
            Slot::Output => &self.output,
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut MembershipFunction {
        match slot {
            Slot::Input => &mut self.input,
            Slot::Output => &mut self.output,
        }
    }

    /// Installs `function` in `slot`, returning the one it replaces.
    pub fn replace(&mut self, slot: Slot, function: MembershipFunction) -> MembershipFunction {
        std::mem::replace(self.slot_mut(slot), function)
    }

    /// Forwards raw parameters to the slot's `set`.
    pub fn configure(&mut self, slot: Slot, parameters: &[&str]) -> Result<(), FunctionError> {
        self.slot_mut(slot).set(parameters)?;
        debug!("Configured {} membership function", slot);
        Ok(())
    }

    /// Textual encoding of the slot's function.
    pub fn describe(&self, slot: Slot) -> String {
        self.slot(slot).get()
    }

    /// Maps a crisp value through the input function; identity when unset.
    pub fn fuzzify(&self, value: f64) -> f64 {
        Self::apply(&self.input, value)
    }

    /// Maps an activation through the output function; identity when unset.
    pub fn defuzzify(&self, activation: f64) -> f64 {
        Self::apply(&self.output, activation)
    }

    fn apply(function: &MembershipFunction, value: f64) -> f64 {
        if function.is_configured() {
            function.evaluate(value)
        } else {
            value
        }
    }
}

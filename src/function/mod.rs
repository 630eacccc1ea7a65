//! # Single-Input Single-Output Functions
//!
//! Functions of the form `out = f(in)` used as membership functions. Every
//! shape implements [`SisoFunction`]; [`MembershipFunction`] is the tagged
//! variant over the available shapes so callers can hold any of them
//! without knowing which.
//!
//! ```rust
//! use fcm_membership::{FunctionKind, MembershipFunction, SisoFunction};
//!
//! let mut mf = MembershipFunction::new(FunctionKind::PiecewiseLinear);
//! assert!(!mf.is_configured());
//!
//! mf.set(&["0;0 1;1"]).unwrap();
//! assert_eq!(mf.evaluate(0.25), 0.25);
//! ```

pub mod error;
pub mod pwl;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub use error::{FunctionError, InvalidArgument};
pub use pwl::PiecewiseLinear;

/// Capability interface shared by every function shape.
pub trait SisoFunction {
    /// Fixed description of the function kind.
    fn info(&self) -> &'static str;

    /// Textual encoding of the current configuration, empty when unset.
    fn get(&self) -> String;

    /// Configures the function from raw parameters. On error the previous
    /// configuration is kept.
    fn set(&mut self, parameters: &[&str]) -> Result<(), FunctionError>;

    /// Computes `f(input)`. Never fails.
    fn evaluate(&self, input: f64) -> f64;

    /// A new, independently owned derivative.
    fn derivative(&self) -> MembershipFunction;

    /// A new, independently owned inverse.
    fn inverse(&self) -> MembershipFunction;

    /// Whether the function has been configured. Derived functions of an
    /// unconfigured function are unconfigured too.
    fn is_configured(&self) -> bool;
}

/// Available function shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionKind {
    #[default]
    PiecewiseLinear,
}

impl fmt::Display for FunctionKind {
    /// Formats the kind for display and serialisation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionKind::PiecewiseLinear => write!(f, "piecewise_linear"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionKindParseError {
    /// Error when parsing an unknown function kind.
    #[error("Invalid FunctionKind: {0}")]
    InvalidValue(String),
}

impl FromStr for FunctionKind {
    type Err = FunctionKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "piecewise_linear" | "piecewiselinear" | "pwl" => Ok(FunctionKind::PiecewiseLinear),
            _ => Err(FunctionKindParseError::InvalidValue(s.to_string())),
        }
    }
}

impl Serialize for FunctionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FunctionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FunctionKind::from_str(&s).map_err(|_| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&s),
                &"a valid FunctionKind (piecewise_linear)",
            )
        })
    }
}

/// A membership function of any supported shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "parameters", rename_all = "snake_case")]
pub enum MembershipFunction {
    PiecewiseLinear(PiecewiseLinear),
}

impl MembershipFunction {
    /// Creates an unconfigured function of the given kind.
    pub fn new(kind: FunctionKind) -> Self {
        match kind {
            FunctionKind::PiecewiseLinear => {
                MembershipFunction::PiecewiseLinear(PiecewiseLinear::new())
            }
        }
    }

    pub fn kind(&self) -> FunctionKind {
        match self {
            MembershipFunction::PiecewiseLinear(_) => FunctionKind::PiecewiseLinear,
        }
    }

    fn inner(&self) -> &dyn SisoFunction {
        match self {
            MembershipFunction::PiecewiseLinear(f) => f,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SisoFunction {
        match self {
            MembershipFunction::PiecewiseLinear(f) => f,
        }
    }
}

impl Default for MembershipFunction {
    fn default() -> Self {
        MembershipFunction::new(FunctionKind::default())
    }
}

impl From<PiecewiseLinear> for MembershipFunction {
    fn from(function: PiecewiseLinear) -> Self {
        MembershipFunction::PiecewiseLinear(function)
    }
}

impl SisoFunction for MembershipFunction {
    fn info(&self) -> &'static str {
        self.inner().info()
    }

    fn get(&self) -> String {
        self.inner().get()
    }

    fn set(&mut self, parameters: &[&str]) -> Result<(), FunctionError> {
        self.inner_mut().set(parameters)
    }

    fn evaluate(&self, input: f64) -> f64 {
        self.inner().evaluate(input)
    }

    fn derivative(&self) -> MembershipFunction {
        self.inner().derivative()
    }

    fn inverse(&self) -> MembershipFunction {
        self.inner().inverse()
    }

    fn is_configured(&self) -> bool {
        self.inner().is_configured()
    }
}

impl fmt::Display for MembershipFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get())
    }
}

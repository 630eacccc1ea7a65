//! Membership functions for fuzzy cognitive map nodes.
//!
//! The central type is [`PiecewiseLinear`], configured from a textual list of
//! `x;y` breakpoints and able to produce its own derivative and inverse.
//! [`MembershipSlots`] pairs an input and an output function for one node.

pub mod function;
pub mod membership;

pub mod types;

pub(crate) mod validation_utils;

#[cfg(test)]
mod test_utils;

pub use crate::function::pwl::{EPSILON, Piece, Point};
pub use crate::function::{
    FunctionError, FunctionKind, InvalidArgument, MembershipFunction, PiecewiseLinear,
    SisoFunction,
};
pub use crate::membership::{ConfigError, MembershipConfig, MembershipSlots, Slot, SlotConfig};

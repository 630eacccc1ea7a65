//! Slot configuration documents.
//!
//! A configuration names the shape and breakpoints of each slot:
//!
//! ```xml
//! <membership>
//!   <input type="piecewise_linear">0;0 1;1</input>
//!   <output>0;1 1;0</output>
//! </membership>
//! ```
//!
//! The `type` attribute is optional and defaults to `piecewise_linear`. An
//! empty slot element clears that slot; an absent one leaves it untouched.
//! Parameters may also be wrapped in CDATA.

use std::{borrow::Cow, io::Cursor};

use log::debug;
use quick_xml::{
    Reader, Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::function::{FunctionError, FunctionKind, MembershipFunction, SisoFunction};

use super::{MembershipSlots, Slot};

const ROOT: &str = "membership";
const KIND_ATTRIBUTE: &str = "type";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed XML.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Written XML or CDATA content was not UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// An element other than the root or a slot.
    #[error("Unexpected element: <{0}>")]
    UnexpectedElement(String),

    /// The document has no `<membership>` element.
    #[error("Missing <membership> root element")]
    MissingRoot,

    /// A `type` attribute naming no known function kind.
    #[error("Unknown function kind: {0}")]
    UnknownKind(String),

    /// The slot's parameters were rejected by its function.
    #[error("Invalid {slot} parameters: {source}")]
    Function {
        slot: Slot,
        #[source]
        source: FunctionError,
    },
}

/// Shape and raw parameters of one slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotConfig {
    #[serde(default)]
    pub kind: FunctionKind,
    #[serde(default)]
    pub parameters: String,
}

impl SlotConfig {
    pub fn new(kind: FunctionKind, parameters: impl Into<String>) -> Self {
        SlotConfig {
            kind,
            parameters: parameters.into(),
        }
    }

    /// Builds the function this entry describes. Empty parameters give an
    /// unconfigured function.
    pub fn build(&self, slot: Slot) -> Result<MembershipFunction, ConfigError> {
        let mut function = MembershipFunction::new(self.kind);
        if !self.parameters.trim().is_empty() {
            function
                .set(&[self.parameters.as_str()])
                .map_err(|source| ConfigError::Function { slot, source })?;
        }
        Ok(function)
    }
}

/// Configuration of both membership slots of a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembershipConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<SlotConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<SlotConfig>,
}

impl MembershipConfig {
    pub fn get(&self, slot: Slot) -> Option<&SlotConfig> {
        match slot {
            Slot::Input => self.input.as_ref(),
            Slot::Output => self.output.as_ref(),
        }
    }

    pub fn insert(&mut self, slot: Slot, entry: SlotConfig) {
        match slot {
            Slot::Input => self.input = Some(entry),
            Slot::Output => self.output = Some(entry),
        }
    }

    /// Captures the configured slots; unconfigured ones are left out.
    pub fn from_slots(slots: &MembershipSlots) -> Self {
        let mut config = MembershipConfig::default();
        for slot in Slot::ALL {
            let function = slots.slot(slot);
            if function.is_configured() {
                config.insert(slot, SlotConfig::new(function.kind(), function.get()));
            }
        }
        config
    }

    /// Configures `slots`. Every entry is built before any slot changes,
    /// so a failure leaves `slots` untouched.
    pub fn apply(&self, slots: &mut MembershipSlots) -> Result<(), ConfigError> {
        let built = Slot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|entry| (slot, entry)))
            .map(|(slot, entry)| entry.build(slot).map(|function| (slot, function)))
            .collect::<Result<Vec<_>, _>>()?;

        for (slot, function) in built {
            debug!("Applying {} configuration to {} slot", function.kind(), slot);
            slots.replace(slot, function);
        }
        Ok(())
    }

    /// Reads a `<membership>` document. The root element is required; slot
    /// parameters may be given as text or CDATA.
    pub fn from_xml(xml: &str) -> Result<Self, ConfigError> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut config = MembershipConfig::default();
        let mut seen_root = false;
        let mut in_root = false;
        let mut open: Option<(Slot, FunctionKind)> = None;
        let mut text = String::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    if !in_root {
                        expect_root(&e, seen_root)?;
                        seen_root = true;
                        in_root = true;
                    } else if open.is_some() {
                        return Err(unexpected(&e));
                    } else {
                        open = Some(slot_header(&e)?);
                        text.clear();
                    }
                }
                Event::Empty(e) => {
                    if !in_root {
                        expect_root(&e, seen_root)?;
                        seen_root = true;
                    } else if open.is_some() {
                        return Err(unexpected(&e));
                    } else {
                        let (slot, kind) = slot_header(&e)?;
                        config.insert(slot, SlotConfig::new(kind, String::new()));
                    }
                }
                Event::Text(t) => {
                    if open.is_some() {
                        text.push_str(&t.unescape()?);
                    }
                }
                Event::CData(t) => {
                    if open.is_some() {
                        text.push_str(&String::from_utf8(t.into_inner().into_owned())?);
                    }
                }
                Event::End(_) => match open.take() {
                    Some((slot, kind)) => {
                        config.insert(slot, SlotConfig::new(kind, text.trim()));
                    }
                    None => in_root = false,
                },
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(ConfigError::MissingRoot);
        }
        Ok(config)
    }

    /// Writes the configuration as a `<membership>` document.
    pub fn to_xml(&self) -> Result<String, ConfigError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        writer.write_event(Event::Start(BytesStart::new(ROOT)))?;
        for slot in Slot::ALL {
            if let Some(entry) = self.get(slot) {
                let name = slot.to_string();
                let kind = entry.kind.to_string();

                let mut start = BytesStart::new(name.as_str());
                start.push_attribute((KIND_ATTRIBUTE, kind.as_str()));

                writer.write_event(Event::Start(start))?;
                writer.write_event(Event::Text(BytesText::new(&entry.parameters)))?;
                writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new(ROOT)))?;

        Ok(String::from_utf8(writer.into_inner().into_inner())?)
    }
}

fn element_name<'a>(e: &'a BytesStart<'_>) -> Cow<'a, str> {
    String::from_utf8_lossy(e.local_name().into_inner())
}

fn is_root(e: &BytesStart<'_>) -> bool {
    element_name(e) == ROOT
}

fn unexpected(e: &BytesStart<'_>) -> ConfigError {
    ConfigError::UnexpectedElement(element_name(e).into_owned())
}

/// Accepts the first top-level element only if it is `<membership>`.
fn expect_root(e: &BytesStart<'_>, seen_root: bool) -> Result<(), ConfigError> {
    if seen_root || !is_root(e) {
        return Err(unexpected(e));
    }
    Ok(())
}

fn slot_header(e: &BytesStart<'_>) -> Result<(Slot, FunctionKind), ConfigError> {
    let name = element_name(e);
    let slot = name
        .parse::<Slot>()
        .map_err(|_| ConfigError::UnexpectedElement(name.to_string()))?;

    let kind = match e.try_get_attribute(KIND_ATTRIBUTE)? {
        Some(attribute) => {
            let value = attribute.unescape_value()?;
            value
                .parse::<FunctionKind>()
                .map_err(|_| ConfigError::UnknownKind(value.to_string()))?
        }
        None => FunctionKind::default(),
    };

    Ok((slot, kind))
}

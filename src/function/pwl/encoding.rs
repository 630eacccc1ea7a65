use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::PiecewiseLinear;

impl Serialize for PiecewiseLinear {
    /// Serialises the function as its textual encoding.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.get())
    }
}

impl<'de> Deserialize<'de> for PiecewiseLinear {
    /// Deserialises the textual encoding; an empty string is an unset function.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PiecewiseLinear::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{PiecewiseLinear, test_utils::pwl};

    #[test]
    fn test_json_encoding() {
        let f = pwl("0;0 2;2 4;0");
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, r#""0;0 2;2 4;0""#);

        let back: PiecewiseLinear = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }

    #[test]
    fn test_unset_encoding() {
        let json = serde_json::to_string(&PiecewiseLinear::new()).unwrap();
        assert_eq!(json, r#""""#);

        let back: PiecewiseLinear = serde_json::from_str(&json).unwrap();
        assert!(!back.is_configured());
    }

    #[test]
    fn test_invalid_encoding_is_rejected() {
        let err = serde_json::from_str::<PiecewiseLinear>(r#""1;0 0;1""#).unwrap_err();
        assert!(err.to_string().contains("not in ascending order"));
    }
}

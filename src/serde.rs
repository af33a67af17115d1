use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::Presence;

// Serialization uses the `get` view: the wrapped text round-trips verbatim,
// blank or not, and classification is recomputed on deserialization.
impl<'a> Serialize for Presence<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.get() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Presence<'de> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <Option<&'de str>>::deserialize(deserializer)?;
        Ok(Presence::of_option(value))
    }
}

#[cfg(test)]
mod test {
    use crate::Presence;

    #[test]
    fn serialize() {
        let json = serde_json::to_string(&Presence::of("taco")).unwrap();
        assert_eq!(json, "\"taco\"");

        let json = serde_json::to_string(&Presence::EMPTY).unwrap();
        assert_eq!(json, "null");

        let json = serde_json::to_string(&Presence::of("   ")).unwrap();
        assert_eq!(json, "\"   \"");
    }

    #[test]
    fn deserialize() {
        let presence: Presence<'_> = serde_json::from_str("\"taco\"").unwrap();
        assert!(presence.is_present());
        assert_eq!(presence.get(), Some("taco"));

        let presence: Presence<'_> = serde_json::from_str("null").unwrap();
        assert_eq!(presence, Presence::EMPTY);

        let presence: Presence<'_> = serde_json::from_str("\"   \"").unwrap();
        assert!(presence.is_empty());
        assert_eq!(presence.get(), Some("   "));
    }

    #[test]
    fn round_trip() {
        let json = serde_json::to_string(&Presence::of(" x ")).unwrap();
        let back: Presence<'_> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Presence::of(" x "));
    }
}

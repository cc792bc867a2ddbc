use crate::Uid;
use core::fmt::Formatter;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Uid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; Uid::STR_LEN];
        serializer.serialize_str(self.format_into(&mut buf))
    }
}

struct UidVisitor;

impl Visitor<'_> for UidVisitor {
    type Value = Uid;

    fn expecting(&self, f: &mut Formatter) -> core::fmt::Result {
        f.write_str("RDM UID in mmmm:dddddddd hex form")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse()
            .map_err(|e| E::custom(format_args!("invalid UID '{v}': {e}")))
    }
}

impl<'de> Deserialize<'de> for Uid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(UidVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::value::{Error as ValueError, StrDeserializer};
    use serde::de::IntoDeserializer;

    #[test]
    fn deserialize_from_str() {
        let de: StrDeserializer<ValueError> = "707A:12345678".into_deserializer();
        assert_eq!(Uid::deserialize(de), Ok(Uid::new(0x707a, 0x1234_5678)));

        let de: StrDeserializer<ValueError> = "12345:1".into_deserializer();
        let err = Uid::deserialize(de).unwrap_err();
        assert!(err.to_string().contains("12345:1"));
    }
}

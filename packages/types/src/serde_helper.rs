// Integer fields that JSON carries as decimal strings.
//
// Use with `#[serde(with = "u64_string")]`. Binary formats such as BCS keep
// the plain integer encoding. Deserializing JSON accepts either a string or
// a bare number.

macro_rules! string_number {
    ($module:ident, $int:ty) => {
        pub mod $module {
            use core::fmt;

            use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

            pub fn serialize<S: Serializer>(value: &$int, serializer: S) -> Result<S::Ok, S::Error> {
                if serializer.is_human_readable() {
                    serializer.collect_str(value)
                } else {
                    value.serialize(serializer)
                }
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$int, D::Error> {
                if deserializer.is_human_readable() {
                    deserializer.deserialize_any(NumberVisitor)
                } else {
                    <$int>::deserialize(deserializer)
                }
            }

            struct NumberVisitor;

            impl<'de> de::Visitor<'de> for NumberVisitor {
                type Value = $int;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "a {} as a decimal string or number", stringify!($int))
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<$int, E> {
                    v.parse().map_err(E::custom)
                }

                fn visit_u64<E: de::Error>(self, v: u64) -> Result<$int, E> {
                    <$int>::try_from(v).map_err(E::custom)
                }

                fn visit_u128<E: de::Error>(self, v: u128) -> Result<$int, E> {
                    <$int>::try_from(v).map_err(E::custom)
                }
            }
        }
    };
}

string_number!(u64_string, u64);
string_number!(u128_string, u128);

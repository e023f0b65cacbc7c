use indexmap::IndexMap;
use serde::Serialize;

use crate::{ByteArray, IntArray, LongArray};

/// Value is a complete SNBT value. It owns its data. Compounds and lists are
/// recursively parsed. This type preserves all the information the grammar
/// can express, with two deliberate exceptions: the `B`/`S`/`F`/`D` numeric
/// suffixes only terminate their token and collapse to [`Double`], and only
/// the `L` suffix keeps an exact 64-bit integer as [`Long`].
///
/// Compounds preserve key insertion order, so two parses of the same input
/// produce structurally identical values.
///
/// ```
/// use snbtlite::Value;
///
/// let item = snbtlite::parse(r#"{id:"minecraft:diamond_sword",Count:1B}"#).unwrap();
/// match item.get("id") {
///     Some(Value::String(id)) => println!("item: {}", id),
///     _ => {}
/// }
/// ```
///
/// [`Double`]: Value::Double
/// [`Long`]: Value::Long
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Fills the holes that explicit list indices can leave behind, e.g.
    /// `[1:"x"]` parses to `[Null, "x"]`. Nothing else produces it.
    Null,
    /// Reserved. The grammar never produces booleans: `1b` is a number and
    /// `true` is an unquoted string.
    Bool(bool),
    /// Any numeric literal except an `L`-suffixed one.
    Double(f64),
    /// An `L`-suffixed integer literal.
    Long(i64),
    String(String),
    List(Vec<Value>),
    Compound(IndexMap<String, Value>),
    ByteArray(ByteArray),
    IntArray(IntArray),
    LongArray(LongArray),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Double(v) => Some(v),
            Value::Long(v) => Some(v as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Double(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Look up a key in a compound. Yields nothing for missing keys and for
    /// non-compound values, so chains of lookups never fail hard.
    ///
    /// ```
    /// let head = snbtlite::parse(r#"{SkullOwner:{Name:"steve"}}"#).unwrap();
    /// let name = head
    ///     .get("SkullOwner")
    ///     .and_then(|owner| owner.get("Name"))
    ///     .and_then(|name| name.as_str());
    /// assert_eq!(name, Some("steve"));
    /// ```
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Compound(map) => map.get(key),
            _ => None,
        }
    }

    /// Look up an element in a list. Yields nothing for out-of-range indices
    /// and for non-list values.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::List(list) => list.get(index),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(i8, Long, as i64);
from!(i16, Long, as i64);
from!(i32, Long, as i64);
from!(i64, Long);
from!(u8, Long, as i64);
from!(u16, Long, as i64);
from!(u32, Long, as i64);
from!(f32, Double, as f64);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(bool, Bool);
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);

// ------------- comparison conveniences -------------

fn eq_i64(value: &Value, other: i64) -> bool {
    value.as_i64().map_or(false, |v| v == other)
}

fn eq_f64(value: &Value, other: f64) -> bool {
    value.as_f64().map_or(false, |v| v == other)
}

fn eq_str(value: &Value, other: &str) -> bool {
    value.as_str().map_or(false, |v| v == other)
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        eq_str(self, other)
    }
}

impl<'a> PartialEq<&'a str> for Value {
    fn eq(&self, other: &&str) -> bool {
        eq_str(self, other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        eq_str(self, other.as_str())
    }
}

macro_rules! partialeq_numeric {
    ($($eq:ident [$($ty:ty)*])*) => {
        $($(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    $eq(self, *other as _)
                }
            }

            impl<'a> PartialEq<$ty> for &'a Value {
                fn eq(&self, other: &$ty) -> bool {
                    $eq(*self, *other as _)
                }
            }
        )*)*
    }
}

partialeq_numeric! {
    eq_i64[i8 i16 i32 i64 isize]
    eq_f64[f32 f64]
}

// ------------- serde interop -------------

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::List(v) => v.serialize(serializer),
            Value::Compound(v) => v.serialize(serializer),
            Value::ByteArray(v) => v.serialize(serializer),
            Value::IntArray(v) => v.serialize(serializer),
            Value::LongArray(v) => v.serialize(serializer),
        }
    }
}

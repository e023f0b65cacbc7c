use std::ops::Deref;

use serde::Serialize;

/// An NBT byte array, written `[B;1,2,3]` in SNBT. Distinct from a list of
/// numbers, which carries no element type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ByteArray {
    data: Vec<i8>,
}

impl ByteArray {
    pub fn new(data: Vec<i8>) -> Self {
        Self { data }
    }
}

impl Deref for ByteArray {
    type Target = Vec<i8>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// An NBT int array, written `[I;1,2,3]` in SNBT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IntArray {
    data: Vec<i32>,
}

impl IntArray {
    pub fn new(data: Vec<i32>) -> Self {
        Self { data }
    }
}

impl Deref for IntArray {
    type Target = Vec<i32>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// An NBT long array, written `[L;1,2,3]` in SNBT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LongArray {
    data: Vec<i64>,
}

impl LongArray {
    pub fn new(data: Vec<i64>) -> Self {
        Self { data }
    }
}

impl Deref for LongArray {
    type Target = Vec<i64>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

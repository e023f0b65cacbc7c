use indexmap::IndexMap;

use crate::Value;

mod parse_tests;

fn compound<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Compound(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect::<IndexMap<_, _>>(),
    )
}

use crate::{parse, parse_with_opts, ByteArray, IntArray, LongArray, ParseOpts, Value};

use super::compound;

#[test]
fn test_empty_containers() {
    assert_eq!(parse("{}").unwrap(), compound([]));
    assert_eq!(parse("[]").unwrap(), Value::List(vec![]));
    assert_eq!(
        parse("{empty:{},list:[]}").unwrap(),
        compound([("empty", compound([])), ("list", Value::List(vec![]))])
    );
}

#[test]
fn test_simple_compound() {
    let v = parse(r#"{name:"test",value:42}"#).unwrap();
    assert_eq!(
        v,
        compound([
            ("name", Value::String("test".to_owned())),
            ("value", Value::Double(42.0)),
        ])
    );
}

#[test]
fn test_number_list() {
    assert_eq!(
        parse("[1,2,3]").unwrap(),
        Value::List(vec![
            Value::Double(1.0),
            Value::Double(2.0),
            Value::Double(3.0),
        ])
    );
}

#[test]
fn test_typed_arrays() {
    assert_eq!(
        parse("[B;1,2,3]").unwrap(),
        Value::ByteArray(ByteArray::new(vec![1, 2, 3]))
    );
    assert_eq!(
        parse("[I;100,200,300]").unwrap(),
        Value::IntArray(IntArray::new(vec![100, 200, 300]))
    );
    assert_eq!(
        parse("[L;1000,2000,3000]").unwrap(),
        Value::LongArray(LongArray::new(vec![1000, 2000, 3000]))
    );
}

#[test]
fn test_empty_typed_arrays() {
    assert_eq!(parse("[B;]").unwrap(), Value::ByteArray(ByteArray::new(vec![])));
    assert_eq!(parse("[I;]").unwrap(), Value::IntArray(IntArray::new(vec![])));
    assert_eq!(parse("[L;]").unwrap(), Value::LongArray(LongArray::new(vec![])));
}

#[test]
fn test_typed_array_elements_may_carry_suffixes() {
    assert_eq!(
        parse("[B;1b,-2b,3B]").unwrap(),
        Value::ByteArray(ByteArray::new(vec![1, -2, 3]))
    );
    assert_eq!(
        parse("[L;1l,2L,-3l]").unwrap(),
        Value::LongArray(LongArray::new(vec![1, 2, -3]))
    );
}

#[test]
fn test_letter_without_semicolon_is_a_list() {
    assert_eq!(
        parse("[Bob]").unwrap(),
        Value::List(vec![Value::String("Bob".to_owned())])
    );
    assert_eq!(
        parse("[B]").unwrap(),
        Value::List(vec![Value::String("B".to_owned())])
    );
}

#[test]
fn test_long_suffix() {
    assert_eq!(parse("1000L").unwrap(), Value::Long(1000));
    assert_eq!(parse("-42l").unwrap(), Value::Long(-42));
    assert_eq!(parse("9007199254740993L").unwrap(), Value::Long(9007199254740993));
}

#[test]
fn test_other_suffixes_collapse_to_double() {
    assert_eq!(parse("1B").unwrap(), Value::Double(1.0));
    assert_eq!(parse("1b").unwrap(), Value::Double(1.0));
    assert_eq!(parse("2S").unwrap(), Value::Double(2.0));
    assert_eq!(parse("3.14F").unwrap(), Value::Double(3.14));
    assert_eq!(parse("2.5D").unwrap(), Value::Double(2.5));
}

#[test]
fn test_signed_numbers() {
    assert_eq!(parse("-5").unwrap(), Value::Double(-5.0));
    assert_eq!(parse("+7").unwrap(), Value::Double(7.0));
    assert_eq!(parse("-2.5").unwrap(), Value::Double(-2.5));
    assert_eq!(parse("50.").unwrap(), Value::Double(50.0));
}

#[test]
fn test_barewords_are_strings() {
    assert_eq!(parse("minecraft").unwrap(), Value::String("minecraft".to_owned()));
    assert_eq!(parse("test_item").unwrap(), Value::String("test_item".to_owned()));
    assert_eq!(parse("no+.quo0tes").unwrap(), Value::String("no+.quo0tes".to_owned()));
    // Booleans are not part of the grammar; they come out as barewords.
    assert_eq!(parse("true").unwrap(), Value::String("true".to_owned()));
    assert_eq!(parse("false").unwrap(), Value::String("false".to_owned()));
}

#[test]
fn test_quoted_strings() {
    assert_eq!(parse(r#""simple""#).unwrap(), Value::String("simple".to_owned()));
    assert_eq!(parse("'single'").unwrap(), Value::String("single".to_owned()));
    assert_eq!(parse(r#""""#).unwrap(), Value::String(String::new()));
    assert_eq!(parse("''").unwrap(), Value::String(String::new()));
    assert_eq!(
        parse(r#""with spaces and: punctuation!""#).unwrap(),
        Value::String("with spaces and: punctuation!".to_owned())
    );
}

#[test]
fn test_unicode_strings() {
    assert_eq!(
        parse("\"Hello 世界\"").unwrap(),
        Value::String("Hello 世界".to_owned())
    );
    assert_eq!(
        parse("\"§aGreen Text\"").unwrap(),
        Value::String("§aGreen Text".to_owned())
    );
    assert_eq!(parse("\"⚔\"").unwrap(), Value::String("⚔".to_owned()));
}

#[test]
fn test_escapes() {
    assert_eq!(parse(r#""a\nb""#).unwrap(), Value::String("a\nb".to_owned()));
    assert_eq!(parse(r#""a\tb""#).unwrap(), Value::String("a\tb".to_owned()));
    assert_eq!(parse(r#""a\rb""#).unwrap(), Value::String("a\rb".to_owned()));
    assert_eq!(parse(r#""a\\b""#).unwrap(), Value::String("a\\b".to_owned()));
    assert_eq!(parse(r#""a\"b""#).unwrap(), Value::String("a\"b".to_owned()));
    assert_eq!(parse(r#"'a\'b'"#).unwrap(), Value::String("a'b".to_owned()));
    // Unknown escapes drop the backslash and keep the character.
    assert_eq!(parse(r#""a\xb""#).unwrap(), Value::String("axb".to_owned()));
}

#[test]
fn test_quoted_keys() {
    assert_eq!(
        parse(r#"{"quoted key":1,'other':2}"#).unwrap(),
        compound([
            ("quoted key", Value::Double(1.0)),
            ("other", Value::Double(2.0)),
        ])
    );
}

#[test]
fn test_explicit_list_indices() {
    assert_eq!(
        parse(r#"[0:"first",1:"second",2:"third"]"#).unwrap(),
        Value::List(vec![
            Value::String("first".to_owned()),
            Value::String("second".to_owned()),
            Value::String("third".to_owned()),
        ])
    );
}

#[test]
fn test_out_of_order_indices() {
    assert_eq!(
        parse(r#"[2:"c",0:"a"]"#).unwrap(),
        Value::List(vec![
            Value::String("a".to_owned()),
            Value::Null,
            Value::String("c".to_owned()),
        ])
    );
}

#[test]
fn test_sparse_list_holes_are_null() {
    assert_eq!(
        parse(r#"[1:"b"]"#).unwrap(),
        Value::List(vec![Value::Null, Value::String("b".to_owned())])
    );
}

#[test]
fn test_index_reassignment_overwrites() {
    assert_eq!(
        parse(r#"[0:"old",0:"new"]"#).unwrap(),
        Value::List(vec![Value::String("new".to_owned())])
    );
}

#[test]
fn test_indexed_compound_elements() {
    assert_eq!(
        parse(r#"[0:{id:"minecraft:sharpness",lvl:5S}]"#).unwrap(),
        Value::List(vec![compound([
            ("id", Value::String("minecraft:sharpness".to_owned())),
            ("lvl", Value::Double(5.0)),
        ])])
    );
}

#[test]
fn test_list_numbers_ignore_suffixes() {
    // Digit-led list elements are scanned as barewords first, and only
    // their numeric prefix survives the conversion.
    assert_eq!(
        parse("[1b,2b]").unwrap(),
        Value::List(vec![Value::Double(1.0), Value::Double(2.0)])
    );
    assert_eq!(parse("[1L]").unwrap(), Value::List(vec![Value::Double(1.0)]));
    assert_eq!(parse("[1e2]").unwrap(), Value::List(vec![Value::Double(100.0)]));
}

#[test]
fn test_mixed_list() {
    assert_eq!(
        parse(r#"[1, "string", 3.14, {key: "value"}]"#).unwrap(),
        Value::List(vec![
            Value::Double(1.0),
            Value::String("string".to_owned()),
            Value::Double(3.14),
            compound([("key", Value::String("value".to_owned()))]),
        ])
    );
}

#[test]
fn test_whitespace_everywhere() {
    assert_eq!(
        parse("  {  name  :  \"test\"  }  ").unwrap(),
        compound([("name", Value::String("test".to_owned()))])
    );
    assert_eq!(
        parse("[\n  1,\n  2,\n  3\n]").unwrap(),
        Value::List(vec![
            Value::Double(1.0),
            Value::Double(2.0),
            Value::Double(3.0),
        ])
    );
    assert_eq!(
        parse("{\n  \"key\": \"value\"\n}").unwrap(),
        compound([("key", Value::String("value".to_owned()))])
    );
}

#[test]
fn test_duplicate_keys_last_wins() {
    let v = parse(r#"{a:1,b:2,a:3}"#).unwrap();
    let map = v.as_compound().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["a"], Value::Double(3.0));
    // The overwritten key keeps its original position.
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_key_order_preserved() {
    let v = parse(r#"{zebra:1,apple:2,mango:3}"#).unwrap();
    let keys: Vec<_> = v.as_compound().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_parse_is_deterministic() {
    let input = r#"{a:[1,2,{b:"c"}],d:[B;1,2],e:1000L}"#;
    assert_eq!(parse(input).unwrap(), parse(input).unwrap());
}

#[test]
fn test_max_depth() {
    let deep = r#"{a:{b:{c:{d:{e:{f:{g:{h:{i:{j:"deep"}}}}}}}}}}"#;

    assert!(parse_with_opts(deep, ParseOpts::new().max_depth(5)).is_err());
    assert!(parse_with_opts(deep, ParseOpts::new().max_depth(15)).is_ok());
    assert!(parse(deep).is_ok());
}

#[test]
fn test_depth_counts_every_value() {
    // The depth counter only unwinds for containers, so scalar compound
    // members each consume a level for the rest of the parse.
    let flat = r#"{a:1,b:2,c:3,d:4,e:5,f:6}"#;
    assert!(parse_with_opts(flat, ParseOpts::new().max_depth(4)).is_err());
    assert!(parse_with_opts(flat, ParseOpts::new().max_depth(10)).is_ok());
}

#[test]
fn test_minecraft_item_patterns() {
    assert_eq!(
        parse("{Count: 1B}").unwrap(),
        compound([("Count", Value::Double(1.0))])
    );
    assert_eq!(
        parse("{Damage: 0S}").unwrap(),
        compound([("Damage", Value::Double(0.0))])
    );

    let uuid = "d14d5e12-9e98-3a67-a701-be84468a74c0";
    assert_eq!(
        parse(&format!("{{Id: \"{}\"}}", uuid)).unwrap(),
        compound([("Id", Value::String(uuid.to_owned()))])
    );
}

#[test]
fn test_player_head_texture_navigation() {
    let base64 = "ewogICJ0aW1lc3RhbXAiIDogMTY3Njk2Njc2NDgwNw==";
    let input = format!(
        r#"{{id:"minecraft:player_head",SkullOwner:{{Properties:{{textures:[0:{{Value:"{}"}}]}}}}}}"#,
        base64
    );

    let head = parse(&input).unwrap();
    let value = head
        .get("SkullOwner")
        .and_then(|owner| owner.get("Properties"))
        .and_then(|props| props.get("textures"))
        .and_then(|textures| textures.get_index(0))
        .and_then(|texture| texture.get("Value"))
        .and_then(Value::as_str);

    assert_eq!(value, Some(base64));

    // A missing key is absence, not an error.
    assert_eq!(head.get("display"), None);
}

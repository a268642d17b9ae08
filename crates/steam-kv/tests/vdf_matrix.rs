use steam_kv::vdf::{decode, encode, Set, Value, VdfDecoder, VdfError};

fn shortcuts_fixture() -> Set {
    let mut shortcut = Set::new();
    shortcut.insert("AppName", Value::Str("Half-Life".into()));
    shortcut.insert("Exe", Value::Str("/usr/bin/hl".into()));
    shortcut.insert("appid", Value::Int(0xC0FF_EE00));
    let mut shortcuts = Set::new();
    shortcuts.insert("0", Value::Set(shortcut));
    let mut root = Set::new();
    root.insert("shortcuts", Value::Set(shortcuts));
    root
}

#[test]
fn encoder_wire_matrix() {
    let mut doc = Set::new();
    doc.insert("k", Value::Str("v".into()));
    assert_eq!(encode(&doc), [0x01, b'k', 0x00, b'v', 0x00, 0x08]);

    let mut doc = Set::new();
    doc.insert("x", Value::Int(42));
    assert_eq!(
        encode(&doc),
        [0x02, b'x', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]
    );

    let mut doc = Set::new();
    doc.insert("s", Value::Set(Set::new()));
    assert_eq!(encode(&doc), [0x00, b's', 0x00, 0x08, 0x08]);

    assert_eq!(encode(&Set::new()), [0x08]);
}

#[test]
fn integer_leaf_exactness() {
    let data = [0x02, b'x', 0x00, 0x2A, 0x00, 0x00, 0x00];
    let doc = decode(&data).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get("x"), Some(&Value::Int(42)));
    assert_eq!(doc.get("x").unwrap().as_int(), Ok(42));
}

#[test]
fn little_endian_integers() {
    let data = [0x02, b'x', 0x00, 0x78, 0x56, 0x34, 0x12];
    let doc = decode(&data).unwrap();
    assert_eq!(doc.get("x"), Some(&Value::Int(0x1234_5678)));
}

#[test]
fn tag_rejection() {
    for byte in [0x03u8, 0x04, 0x05, 0x07, 0x09, 0xFF] {
        assert_eq!(decode(&[byte]), Err(VdfError::MalformedTag(byte)));
    }
    // All four known tags are accepted in tag position.
    assert!(decode(&[0x08]).is_ok());
    assert!(decode(&[0x00, b's', 0x00, 0x08, 0x08]).is_ok());
}

#[test]
fn unterminated_set_is_rejected() {
    // Set tag + empty key, then the buffer ends: EOF is not a terminator.
    assert_eq!(decode(&[0x00, 0x00]), Err(VdfError::UnterminatedSet));
}

#[test]
fn unterminated_strings_are_rejected() {
    // Key never reaches a NUL.
    assert_eq!(decode(&[0x01, b'k']), Err(VdfError::UnterminatedString));
    // Value never reaches a NUL.
    assert_eq!(
        decode(&[0x01, b'k', 0x00, b'v']),
        Err(VdfError::UnterminatedString)
    );
}

#[test]
fn truncated_integer_is_rejected() {
    assert_eq!(
        decode(&[0x02, b'x', 0x00, 0x2A, 0x00]),
        Err(VdfError::TruncatedInteger)
    );
}

#[test]
fn failure_inside_a_nested_set_aborts_the_whole_parse() {
    // Valid first element, then a nested set containing a bad tag.
    let data = [
        0x01, b'a', 0x00, b'v', 0x00, // "a" = "v"
        0x00, b's', 0x00, // set "s"
        0x05, // unknown tag inside the set
        0x08,
    ];
    assert_eq!(decode(&data), Err(VdfError::MalformedTag(0x05)));
}

#[test]
fn round_trip_reproduces_the_document() {
    let doc = shortcuts_fixture();
    let bytes = encode(&doc);
    assert_eq!(decode(&bytes).unwrap(), doc);
}

#[test]
fn reserialization_is_idempotent() {
    let doc = shortcuts_fixture();
    let first = encode(&doc);
    let second = encode(&decode(&first).unwrap());
    assert_eq!(first, second);
}

#[test]
fn insertion_order_does_not_affect_the_wire_bytes() {
    let mut forward = Set::new();
    forward.insert("a", Value::Int(1));
    forward.insert("b", Value::Str("two".into()));
    let mut backward = Set::new();
    backward.insert("b", Value::Str("two".into()));
    backward.insert("a", Value::Int(1));
    assert_eq!(forward, backward);
    assert_eq!(encode(&forward), encode(&backward));
}

#[test]
fn deep_documents_round_trip_below_the_limit() {
    let mut doc = Set::new();
    for _ in 0..100 {
        let mut outer = Set::new();
        outer.insert("s", Value::Set(doc));
        doc = outer;
    }
    let bytes = encode(&doc);
    assert_eq!(decode(&bytes).unwrap(), doc);
    // A tighter limit rejects the same bytes.
    assert_eq!(
        VdfDecoder::with_max_depth(10).decode(&bytes),
        Err(VdfError::TooDeep(10))
    );
}

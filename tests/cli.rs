use std::fs;
use std::path::PathBuf;
use std::process::Command;

const ENCODE: &str = env!("CARGO_BIN_EXE_encode");
const DECODE: &str = env!("CARGO_BIN_EXE_decode");

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("huffman-cli-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn encode_without_arguments_exits_with_one() {
    let status = Command::new(ENCODE).status().unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn decode_with_too_few_arguments_exits_with_one() {
    let status = Command::new(DECODE).args(["a", "b"]).status().unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn missing_source_exits_with_one() {
    let dir = scratch_dir("missing");
    let status = Command::new(ENCODE)
        .arg(dir.join("does-not-exist.txt"))
        .arg(dir.join("out.bits"))
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn encode_then_decode_restores_the_file() {
    let dir = scratch_dir("round-trip");
    let source = dir.join("source.txt");
    let bits = dir.join("source.bits");
    let restored = dir.join("restored.txt");
    let text = "she sells sea shells\nby the sea shore\n";
    fs::write(&source, text).unwrap();

    let status = Command::new(ENCODE).arg(&source).arg(&bits).status().unwrap();
    assert!(status.success());
    let encoded = fs::read_to_string(&bits).unwrap();
    assert!(!encoded.is_empty());
    assert!(encoded.chars().all(|b| b == '0' || b == '1'));

    let status = Command::new(DECODE)
        .arg(&source)
        .arg(&bits)
        .arg(&restored)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read_to_string(&restored).unwrap(), text);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn decode_rejects_corrupt_bits() {
    let dir = scratch_dir("corrupt");
    let source = dir.join("source.txt");
    let bits = dir.join("bad.bits");
    fs::write(&source, "abc").unwrap();
    fs::write(&bits, "01x").unwrap();

    let status = Command::new(DECODE)
        .arg(&source)
        .arg(&bits)
        .arg(dir.join("out.txt"))
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));

    fs::remove_dir_all(&dir).unwrap();
}

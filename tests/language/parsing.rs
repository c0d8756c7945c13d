//! Integration tests for Blueprint line decomposition

use architect_foundation::ErrorKind;
use architect_language::{FunctionalChar, Instruction, TypeCode};

#[test]
fn link_instruction_parts() {
    let instruction = Instruction::parse("rom_Start&e Hallway").unwrap().unwrap();
    assert_eq!(instruction.type_code, TypeCode::Room);
    assert_eq!(instruction.target, "Start");
    assert_eq!(instruction.functional, FunctionalChar::Link);
    assert_eq!(instruction.params, "e Hallway");
}

#[test]
fn empty_target_is_allowed() {
    let instruction = Instruction::parse("sys_!Hello").unwrap().unwrap();
    assert_eq!(instruction.type_code, TypeCode::System);
    assert_eq!(instruction.target, "");
    assert_eq!(instruction.params, "Hello");
}

#[test]
fn first_functional_char_wins() {
    let instruction = Instruction::parse("obj_key#NAME Key & Chain!").unwrap().unwrap();
    assert_eq!(instruction.functional, FunctionalChar::SetAttribute);
    assert_eq!(instruction.params, "NAME Key & Chain!");
}

#[test]
fn pass_is_a_no_op() {
    assert!(Instruction::parse("pass").unwrap().is_none());
    assert!(Instruction::parse("  pass  ").unwrap().is_none());
}

#[test]
fn unknown_type_code() {
    let err = Instruction::parse("zap_key+").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownInstructionType(ref code) if code == "zap"));
}

#[test]
fn missing_functional_char() {
    let err = Instruction::parse("rom_Start").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingFunctionalChar(_)));
}

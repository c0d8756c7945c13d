//! Integration tests for the `ift` parameter grammar

use architect_foundation::ErrorKind;
use architect_language::{Comparator, Conditional, FunctionalChar};

#[test]
fn branches_split_on_braces_and_angle() {
    let conditional =
        Conditional::parse("$>inv_key-}sys_!Dropped.<sys_!Nothing to drop.").unwrap();
    assert_eq!(conditional.comparand, "$");
    assert_eq!(conditional.then_branch, vec!["inv_key-", "sys_!Dropped."]);
    assert_eq!(conditional.else_branch, vec!["sys_!Nothing to drop."]);
}

#[test]
fn else_branch_is_optional() {
    let conditional = Conditional::parse("_>sys_!Here.").unwrap();
    assert_eq!(conditional.branch(true), ["sys_!Here.".to_string()]);
    assert!(conditional.branch(false).is_empty());
}

#[test]
fn escaped_delimiters_nest() {
    let conditional =
        Conditional::parse(r"$>ift_lamp@$\>sys_!both\<sys_!key only<sys_!none").unwrap();
    assert_eq!(
        conditional.then_branch,
        vec!["ift_lamp@$>sys_!both<sys_!key only"]
    );
    assert_eq!(conditional.else_branch, vec!["sys_!none"]);
}

#[test]
fn malformed_shapes() {
    for params in ["$", "$<sys_!x", "$}sys_!x", "$>a<b<c"] {
        let err = Conditional::parse(params).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::MalformedConditional(_)),
            "{params}"
        );
    }
}

#[test]
fn only_identity_and_holding_compare() {
    assert_eq!(
        Comparator::from_functional(FunctionalChar::Identical).unwrap(),
        Comparator::Identical
    );
    assert_eq!(
        Comparator::from_functional(FunctionalChar::Holds).unwrap(),
        Comparator::Holds
    );
    assert!(Comparator::from_functional(FunctionalChar::Add).is_err());
}

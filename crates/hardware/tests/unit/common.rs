//! Literal parsing and error messages.

use rstest::rstest;
use rvsbp_core::Error;
use rvsbp_core::common::parse_u32;

#[rstest]
#[case("0x8C218363", 0x8C21_8363)]
#[case("0X1000", 0x1000)]
#[case("0x8C21_8363", 0x8C21_8363)]
#[case("0b1011", 11)]
#[case("0B1", 1)]
#[case("4096", 4096)]
#[case("  42 ", 42)]
#[case("4294967295", u32::MAX)]
fn accepted_literals(#[case] text: &str, #[case] expected: u32) {
    assert_eq!(parse_u32(text).expect(text), expected);
}

#[rstest]
#[case("")]
#[case("0x")]
#[case("0xG0")]
#[case("0b102")]
#[case("4294967296")]
#[case("-1")]
#[case("ten")]
fn rejected_literals(#[case] text: &str) {
    let err = parse_u32(text).expect_err(text);
    assert!(matches!(&err, Error::InvalidNumber(t) if t == text), "{err}");
    assert!(err.to_string().contains("0x-hex"));
}

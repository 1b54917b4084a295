use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1002.to_string(), "E1002");
    assert_eq!(ErrorCode::E9001.as_str(), "E9001");
}

#[test]
fn test_error_code_phases() {
    assert!(ErrorCode::E1001.is_parser_error());
    assert!(ErrorCode::E1003.is_parser_error());
    assert!(!ErrorCode::E0001.is_parser_error());
    assert!(ErrorCode::E9001.is_internal_error());
    assert!(!ErrorCode::E1002.is_internal_error());
}

#[test]
fn test_error_code_from_str() {
    assert_eq!("e1002".parse::<ErrorCode>(), Ok(ErrorCode::E1002));
    assert_eq!("E9001".parse::<ErrorCode>(), Ok(ErrorCode::E9001));
    assert!("E4242".parse::<ErrorCode>().is_err());
}

#[test]
fn test_all_variants_round_trip() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
        assert!(!code.description().is_empty());
    }
}

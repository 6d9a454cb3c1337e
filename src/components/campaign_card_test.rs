use super::*;

#[test]
fn groups_thousands() {
    assert_eq!(format_etb(0.0), "0 ETB");
    assert_eq!(format_etb(999.0), "999 ETB");
    assert_eq!(format_etb(1000.0), "1,000 ETB");
    assert_eq!(format_etb(1_234_567.0), "1,234,567 ETB");
}

#[test]
fn rounds_to_whole_birr_and_clamps_negatives() {
    assert_eq!(format_etb(1249.6), "1,250 ETB");
    assert_eq!(format_etb(-10.0), "0 ETB");
}

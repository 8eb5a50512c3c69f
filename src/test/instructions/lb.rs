use crate::test::*;

#[test]
fn reads_a_single_byte_zero_extended() {
    let mut body = enc_ri("li", 1, 0xAB);
    body.extend(enc_ri("sb", 1, 0x10));
    body.extend(enc_ri("lb", 2, 0x10));
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.process(0).r[2], 0xAB);
}

#[test]
fn out_of_range_load_is_skipped() {
    let mut body = enc_ri("li", 3, 7);
    body.extend(enc_ri("lb", 3, 0x7FFF_FFFF));
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.process(0).r[3], 7);
}

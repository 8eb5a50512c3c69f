use crate::test::*;

#[test]
fn out_of_range_load_is_a_silent_no_op() {
    let mut body = enc_ri("li", 0, 0x1111_1111);
    body.extend(enc_ri("lw", 0, 0x7FFF_FFFF));
    body.extend(exit_sequence());

    let sup = run_one(body);
    // r0 keeps its prior value; the load never touched it.
    assert_eq!(sup.process(0).r[0], 0x1111_1111);
}

#[test]
fn succeeds_at_exactly_nmem_minus_four() {
    // lw's bounds check adds 4 before comparing against nmem, so an
    // address whose word lands exactly on the last four bytes succeeds.
    let mut body = enc_ri("li", 1, 0x2a);
    body.extend(enc_ri("sw", 1, 0x100));
    let addr = 0x100 - 4u32;
    body.extend(enc_ri("lw", 2, addr));
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.process(0).r[2], 0x2a);
}

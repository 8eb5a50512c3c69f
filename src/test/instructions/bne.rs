use crate::test::*;

#[test]
fn taken_when_operands_differ() {
    let mut body = enc_ri("li", 1, 1);
    body.extend(enc_ri("li", 2, 2));
    body.extend(enc_rri("bne", 1, 2, 0));
    body.extend(enc_ri("li", 3, 1)); // never reached: branch loops back to epc
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.process(0).r[3], 0);
}

#[test]
fn not_taken_when_equal() {
    let mut body = enc_ri("li", 1, 3);
    body.extend(enc_ri("li", 2, 3));
    body.extend(enc_rri("bne", 1, 2, 0x9999)); // would jump far away if taken
    body.extend(enc_ri("li", 3, 1));
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.process(0).r[3], 1);
}

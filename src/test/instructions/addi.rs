use crate::test::*;

#[test]
fn operand_order_is_reg_imm_reg() {
    let mut body = enc_ri("li", 1, 5);
    body.extend(enc_rir("addi", 1, 100, 2));
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.process(0).r[2], 105);
}

use crate::test::*;

#[test]
fn strict_less_than_despite_the_mnemonic() {
    // equal operands must NOT branch, even though "ble" suggests <=.
    let mut body = enc_ri("li", 1, 5);
    body.extend(enc_ri("li", 2, 5));
    let branch = enc_rri("ble", 1, 2, 0);
    body.extend(&branch);
    body.extend(enc_ri("li", 3, 1));
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.process(0).r[3], 1, "branch must not be taken on equality");
}

#[test]
fn taken_when_strictly_less() {
    let mut body = enc_ri("li", 1, 1);
    body.extend(enc_ri("li", 2, 5));
    body.extend(enc_rri("ble", 1, 2, 0)); // branch target: epc (offset 0)
    body.extend(enc_ri("li", 3, 1)); // skipped when taken
    body.extend(exit_sequence());

    let sup = run_one(body);
    // Taken branch resets pc to epc, re-running from the start forever
    // until the SCHCNT quantum is spent; r3 is never written.
    assert_eq!(sup.process(0).r[3], 0);
}

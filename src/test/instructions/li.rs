use crate::test::*;

#[test]
fn loads_the_immediate_verbatim() {
    let mut body = enc_ri("li", 5, 0xdead_beef);
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.process(0).r[5], 0xdead_beef);
}

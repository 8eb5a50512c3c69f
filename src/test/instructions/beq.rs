use crate::test::*;

#[test]
fn add_and_branch_scenario_from_the_spec() {
    // li %1 $5 ; li %2 $5 ; beq %1 %2 end ; li %3 $1 ; end: li %4 $7
    let li1 = enc_ri("li", 1, 5);
    let li2 = enc_ri("li", 2, 5);
    let skipped = enc_ri("li", 3, 1);
    let branch_len = enc_rri("beq", 0, 0, 0).len() as u32;
    let end_offset = (li1.len() + li2.len()) as u32 + branch_len + skipped.len() as u32;

    let mut body = li1;
    body.extend(li2);
    body.extend(enc_rri("beq", 1, 2, end_offset));
    body.extend(skipped);
    body.extend(enc_ri("li", 4, 7));
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.process(0).r[3], 0);
    assert_eq!(sup.process(0).r[4], 7);
}

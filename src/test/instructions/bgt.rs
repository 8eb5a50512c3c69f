use crate::test::*;

#[test]
fn taken_only_when_strictly_greater() {
    let mut body = enc_ri("li", 1, 9);
    body.extend(enc_ri("li", 2, 4));
    body.extend(enc_rri("bgt", 1, 2, skip_offset()));
    body.extend(enc_ri("li", 3, 1)); // skipped
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.process(0).r[3], 0);
}

fn skip_offset() -> u32 {
    // Offset (from epc) of the instruction right after the one `li` that
    // the branch is meant to skip: two `li`s + the branch itself.
    (enc_ri("li", 1, 0).len() * 2 + enc_rri("bgt", 0, 0, 0).len()) as u32
        + enc_ri("li", 3, 0).len() as u32
}

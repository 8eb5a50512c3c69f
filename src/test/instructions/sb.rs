use crate::test::*;

#[test]
fn grows_by_128_and_writes_one_byte() {
    let mut body = enc_ri("li", 1, 0xAB);
    body.extend(enc_ri("sb", 1, 0x500));
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.arena_byte(0x500), Some(0xAB));
    assert!(sup.arena_len() >= 0x500 + 128);
    assert_eq!(sup.arena_byte(0x500 + 1), Some(0));
}

#[test]
fn growth_triggers_when_addr_equals_nmem() {
    let mut body = enc_ri("li", 1, 1);
    let total_len = (body.len() + enc_ri("sb", 1, 0).len() + exit_sequence().len()) as u32;
    body.extend(enc_ri("sb", 1, total_len));
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.arena_byte(total_len as usize), Some(1));
    assert!(sup.arena_len() >= total_len as usize + 128);
}

use crate::test::*;
use crate::constants::STAT_EXIT;

fn runs_and_terminates_the_process(body: Vec<u8>) {
    let sup = run_one(body);
    assert_eq!(sup.process(0).stat & STAT_EXIT, STAT_EXIT);
}

#[test]
fn lwu_is_reserved() {
    let mut body = enc_ri("lwu", 0, 0);
    body.extend(exit_sequence());
    runs_and_terminates_the_process(body);
}

#[test]
fn swu_is_reserved() {
    let mut body = enc_ri("swu", 0, 0);
    body.extend(exit_sequence());
    runs_and_terminates_the_process(body);
}

#[test]
fn sr_is_reserved() {
    let mut body = enc_ri("sr", 0, 0);
    body.extend(exit_sequence());
    runs_and_terminates_the_process(body);
}

#[test]
fn sub_is_reserved() {
    let mut body = enc_rrr("sub", 0, 1, 2);
    body.extend(exit_sequence());
    runs_and_terminates_the_process(body);
}

#[test]
fn mul_is_reserved() {
    let mut body = enc_rrr("mul", 0, 1, 2);
    body.extend(exit_sequence());
    runs_and_terminates_the_process(body);
}

#[test]
fn div_is_reserved() {
    let mut body = enc_rrr("div", 0, 1, 2);
    body.extend(exit_sequence());
    runs_and_terminates_the_process(body);
}

/// A reserved opcode kills only the offending process, never the whole
/// tick, unlike an illegal syscall.
#[test]
fn a_second_process_is_unaffected_by_the_first_hitting_a_reserved_opcode() {
    use crate::scheduler::Supervisor;

    let mut sup = Supervisor::new();
    let mut bad = enc_rrr("div", 0, 1, 2);
    bad.extend(exit_sequence());
    sup.load_image(&bad).unwrap();
    sup.load_image(&exit_sequence()).unwrap();

    sup.tick().unwrap();

    assert_eq!(sup.process(0).stat & STAT_EXIT, STAT_EXIT);
    assert_eq!(sup.process(1).stat & STAT_EXIT, STAT_EXIT);
}

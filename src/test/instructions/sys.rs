use crate::test::*;
use crate::constants::STAT_EXIT;
use crate::VmError;

#[test]
fn syse_sets_the_exit_flag() {
    let sup = run_one(exit_sequence());
    assert_eq!(sup.process(0).stat & STAT_EXIT, STAT_EXIT);
}

#[test]
fn sysw_appends_r1_low_byte_to_the_tty() {
    let mut body = enc_ri("li", 1, 0x41);
    body.extend(enc_ri("li", 0, 2)); // SYSW
    body.extend(enc_r("sys", 0));
    body.extend(exit_sequence());

    let sup = run_one(body);
    assert_eq!(sup.tty().snapshot(), &[0x41]);
}

#[test]
fn exit_is_idempotent_once_set() {
    use crate::scheduler::Supervisor;

    let mut sup = Supervisor::new();
    sup.load_image(&exit_sequence()).unwrap();
    sup.tick().unwrap();
    let pc_after_first_tick = sup.process(0).pc;

    sup.tick().unwrap();
    assert_eq!(sup.process(0).pc, pc_after_first_tick);
}

#[test]
fn unknown_selector_is_an_illegal_syscall() {
    let mut sup = crate::scheduler::Supervisor::new();
    sup.load_image(&{
        let mut b = enc_ri("li", 0, 0x42);
        b.extend(enc_r("sys", 0));
        b
    })
    .unwrap();

    assert_eq!(sup.tick(), Err(VmError::IllegalSyscall { selector: 0x42 }));
}

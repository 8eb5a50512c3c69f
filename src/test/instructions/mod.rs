mod addi;
mod beq;
mod bgt;
mod ble;
mod bne;
mod lb;
mod li;
mod lw;
mod reserved;
mod sb;
mod sys;

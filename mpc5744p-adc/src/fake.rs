//! Software model of the register blocks and the pad multiplexer
use core::cell::RefCell;
use mpc5744p_adc_core::{Instance, Pad, PadControl, Register, RegisterAccess};
use std::collections::HashMap;
use std::vec::Vec;

/// Plain storage per `(instance, register)` with an ordered write log.
/// Registers never written read as 0. No hardware side effects are modelled
/// (flags are not cleared by writing 1, start bits do not self-clear).
#[derive(Default)]
pub struct FakeRegisters {
    values: RefCell<HashMap<(Instance, Register), u32>>,
    writes: RefCell<Vec<(Instance, Register, u32)>>,
}

impl FakeRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a register value without logging a write
    pub fn preload(&self, instance: Instance, register: Register, value: u32) {
        self.values.borrow_mut().insert((instance, register), value);
    }

    pub fn value(&self, instance: Instance, register: Register) -> u32 {
        self.values
            .borrow()
            .get(&(instance, register))
            .copied()
            .unwrap_or(0)
    }

    pub fn writes(&self) -> Vec<(Instance, Register, u32)> {
        self.writes.borrow().clone()
    }

    /// Registers written, in order, without values
    pub fn written_registers(&self) -> Vec<Register> {
        self.writes.borrow().iter().map(|(_, r, _)| *r).collect()
    }

    /// Snapshot of every stored register
    pub fn snapshot(&self) -> HashMap<(Instance, Register), u32> {
        self.values.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.writes.borrow_mut().clear();
    }
}

unsafe impl RegisterAccess for FakeRegisters {
    fn read(&self, instance: Instance, register: Register) -> u32 {
        self.value(instance, register)
    }

    fn write(&self, instance: Instance, register: Register, value: u32) {
        self.values.borrow_mut().insert((instance, register), value);
        self.writes.borrow_mut().push((instance, register, value));
    }
}

/// Records every pad switched to analog input
#[derive(Default)]
pub struct FakePads {
    configured: RefCell<Vec<Pad>>,
}

impl FakePads {
    pub fn configured(&self) -> Vec<Pad> {
        self.configured.borrow().clone()
    }
}

impl PadControl for FakePads {
    fn configure_analog_input(&self, pad: Pad) {
        self.configured.borrow_mut().push(pad);
    }
}

//! Memory mapped register access
use mpc5744p_adc_core::{Instance, Register, RegisterAccess};
use vcell::VolatileCell;

/// Volatile access to the ADC register blocks at their fixed addresses
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    /// The caller must be the owner of all four ADC register blocks. Nothing
    /// else may access them while the returned value exists. Do not keep
    /// multiple instances.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }

    fn cell(&self, instance: Instance, register: Register) -> &VolatileCell<u32> {
        let address = instance.base_address() + register.offset();
        // Safety: `address` is a word aligned register inside a block owned by
        // `self`.
        unsafe { &*(address as *const VolatileCell<u32>) }
    }
}

// Safety: the addresses come from the fixed register map and `Mmio::new`
// requires exclusive ownership of the blocks.
unsafe impl RegisterAccess for Mmio {
    fn read(&self, instance: Instance, register: Register) -> u32 {
        self.cell(instance, register).get()
    }

    fn write(&self, instance: Instance, register: Register, value: u32) {
        self.cell(instance, register).set(value)
    }
}

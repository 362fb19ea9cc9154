// Writer module: hands allocations back to the page's input fields.
pub mod form_fill;

use crate::model::Allocated;

pub use form_fill::{write_output, FieldAssignment, FormFill, RunOutput};

/// Something that can display a quantity on a row's writable target.
pub trait TargetWriter<T> {
    fn set(&mut self, target: &T, value: u32);
    fn clear(&mut self, target: &T);
}

/// Writes each positive allocation and clears the target of every other
/// offer, so values left over from an earlier run never survive.
pub fn apply_allocations<T, W: TargetWriter<T>>(allocated: &[Allocated<T>], writer: &mut W) {
    for item in allocated {
        if item.allocation > 0 {
            writer.set(&item.target, item.allocation);
        } else {
            writer.clear(&item.target);
        }
    }
}

use crate::allocator::AllocationReport;
use crate::model::{FieldTarget, WriteError};
use crate::writer::TargetWriter;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Value to put into one quantity input. An empty value clears the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldAssignment {
    pub field: String,
    pub value: String,
}

/// Collects field values in the order they were written.
#[derive(Debug, Default)]
pub struct FormFill {
    assignments: Vec<FieldAssignment>,
}

impl FormFill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assignments(&self) -> &[FieldAssignment] {
        &self.assignments
    }

    pub fn into_assignments(self) -> Vec<FieldAssignment> {
        self.assignments
    }
}

impl TargetWriter<FieldTarget> for FormFill {
    fn set(&mut self, target: &FieldTarget, value: u32) {
        self.assignments.push(FieldAssignment {
            field: target.field.clone(),
            value: value.to_string(),
        });
    }

    fn clear(&mut self, target: &FieldTarget) {
        self.assignments.push(FieldAssignment {
            field: target.field.clone(),
            value: String::new(),
        });
    }
}

/// Everything one run produces.
#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub report: AllocationReport,
    pub fields: Vec<FieldAssignment>,
}

/// Writes the run output as pretty JSON to `path`, or to stdout when no path is given.
pub fn write_output(output: &RunOutput, path: Option<&Path>) -> Result<(), WriteError> {
    let json = serde_json::to_string_pretty(output)?;
    match path {
        Some(path) => {
            fs::write(path, json)?;
            info!("✅ Wrote {} field values to {}", output.fields.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::summarize;
    use crate::model::{Allocated, Condition, Offer};
    use crate::writer::apply_allocations;
    use rust_decimal::Decimal;

    fn allocated(field: &str, allocation: u32) -> Allocated {
        Allocated {
            offer: Offer {
                product_key: field.into(),
                name: "Brick".into(),
                condition: Condition::New,
                price: Decimal::new(10, 2),
                available_quantity: 10,
                wanted_quantity: 4,
            },
            target: FieldTarget::new(field),
            allocation,
            group_wanted: 4,
        }
    }

    #[test]
    fn positive_allocations_are_written_and_zero_clears() {
        let mut form = FormFill::new();
        apply_allocations(&[allocated("q1", 4), allocated("q2", 0)], &mut form);

        assert_eq!(
            form.assignments(),
            &[
                FieldAssignment { field: "q1".into(), value: "4".into() },
                FieldAssignment { field: "q2".into(), value: String::new() },
            ]
        );
    }

    #[test]
    fn output_is_written_as_json() {
        let items = [allocated("q1", 4)];
        let mut form = FormFill::new();
        apply_allocations(&items, &mut form);
        let output = RunOutput {
            report: summarize(&items),
            fields: form.into_assignments(),
        };

        let path = std::env::temp_dir().join(format!("cart-allocator-{}-output.json", std::process::id()));
        write_output(&output, Some(&path)).unwrap();

        let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["fields"][0]["field"], "q1");
        assert_eq!(written["fields"][0]["value"], "4");
        assert_eq!(written["report"]["groups"][0]["name"], "Brick");
        assert_eq!(written["report"]["groups"][0]["shortfall"], 0);
        fs::remove_file(&path).unwrap();
    }
}

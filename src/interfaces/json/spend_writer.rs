use crate::domain::method::MethodSpend;
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;

/// Spend below this threshold is treated as zero and not printed.
const DISPLAY_EPSILON: Decimal = dec!(0.0000000001);

/// Writes the spend report as `id amount` lines with two-decimal amounts.
///
/// Methods whose accumulated spend is negligible are filtered out here, at
/// the presentation boundary only; the report itself covers every method.
pub struct SpendWriter<W: Write> {
    writer: W,
}

impl<W: Write> SpendWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(&mut self, report: &[MethodSpend]) -> Result<()> {
        for entry in report {
            if entry.spent > DISPLAY_EPSILON {
                writeln!(self.writer, "{} {:.2}", entry.id, entry.spent)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

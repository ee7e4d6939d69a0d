//! Interactive collection of the input record.
//!
//! Values are prompted for in a fixed order: lower flange, web, upper
//! flange, span, compressive limit, tensile limit, applied moment. The first
//! value that fails to parse aborts collection.

use std::io::{BufRead, Write};

use log::debug;

use ibeam_core::{CalcError, CalcResult, IBeamInput, PartRole};

/// Reads numeric answers to prompts from any line source.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter { reader, writer }
    }

    fn say(&mut self, text: &str) -> CalcResult<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| CalcError::file_error("write", "<stdout>", e.to_string()))
    }

    /// Print `label` and parse the next line as `f64`.
    pub fn prompt_f64(&mut self, label: &str) -> CalcResult<f64> {
        self.say(&format!("{}: ", label))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
        if read == 0 {
            return Err(CalcError::missing_field(label.trim_end()));
        }

        let trimmed = line.trim();
        trimmed
            .parse::<f64>()
            .map_err(|e| CalcError::parse_error(label.trim_end(), trimmed, e.to_string()))
    }

    /// Prompt for a part's width and height, labels aligned like the original console layout
    fn prompt_part(&mut self, role: PartRole) -> CalcResult<(f64, f64)> {
        let width = self.prompt_f64(&format!("{:<12} - width (mm)", role.display_name()))?;
        let height = self.prompt_f64(&format!("{:<12} - height(mm)", role.display_name()))?;
        debug!("{}: {} x {} mm", role, width, height);
        Ok((width, height))
    }

    /// Collect every field of the input record.
    pub fn collect(&mut self) -> CalcResult<IBeamInput> {
        self.say("Input dimensions: \n")?;

        let (lower_flange_width_mm, lower_flange_height_mm) = self.prompt_part(PartRole::LowerFlange)?;
        let (web_width_mm, web_height_mm) = self.prompt_part(PartRole::Web)?;
        let (upper_flange_width_mm, upper_flange_height_mm) = self.prompt_part(PartRole::UpperFlange)?;

        let span_m = self.prompt_f64("Span length (m)")?;
        let allowable_stress_compression_mpa = self.prompt_f64("Permissible Stress (Compression) (N/mm2)")?;
        let allowable_stress_tension_mpa = self.prompt_f64("Permissible Stress (Tension)     (N/mm2)")?;
        let applied_moment_knm = self.prompt_f64("Applied bending moment            (kN-m)")?;

        Ok(IBeamInput {
            lower_flange_width_mm,
            lower_flange_height_mm,
            web_width_mm,
            web_height_mm,
            upper_flange_width_mm,
            upper_flange_height_mm,
            span_m,
            allowable_stress_compression_mpa,
            allowable_stress_tension_mpa,
            applied_moment_knm,
        })
    }
}

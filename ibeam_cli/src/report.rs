//! Report rendering for an [`IBeamResult`].

use ibeam_core::{CalcResult, IBeamResult};

const LABEL_WIDTH: usize = 36;

/// Eleven report lines in fixed order: label, value, unit
fn report_rows(result: &IBeamResult) -> [(&'static str, f64, &'static str); 11] {
    [
        ("Moment of Inertia (about NA)", result.moment_of_inertia_mm4, "mm4"),
        ("Max Tensile Moment      (MT)", result.max_tensile_moment_knm, "kN-m"),
        ("Max Compressive Moment  (MC)", result.max_compressive_moment_knm, "kN-m"),
        ("Moment of Resistance   (MOR)", result.moment_of_resistance_knm, "kN-m"),
        ("Maximum UDL across the span", result.max_udl_kn_per_m, "kN/m"),
        ("Maximum total load across the span", result.max_total_load_kn, "kN"),
        ("Maximum concentrated load at midspan", result.max_concentrated_load_kn, "kN"),
        ("Maximum induced tensile stress", result.max_induced_tensile_stress_mpa, "N/mm2"),
        ("Maximum induced compressive stress", result.max_induced_compressive_stress_mpa, "N/mm2"),
        ("Total tensile force", result.total_tensile_force_kn, "kN"),
        ("Total compressive force", result.total_compressive_force_kn, "kN"),
    ]
}

/// Render the text report with `precision` decimal places.
pub fn render_text(result: &IBeamResult, precision: usize) -> String {
    let mut out = String::from("\n--- Analysis ---\n");

    for (label, value, unit) in report_rows(result) {
        out.push_str(&format!(
            "{:<width$}: {:.prec$} {}\n",
            label,
            value,
            unit,
            width = LABEL_WIDTH,
            prec = precision
        ));
    }

    out.push_str(&format!(
        "{:<width$}: {}\n",
        "Governing fiber",
        result.governing_fiber,
        width = LABEL_WIDTH
    ));
    out.push_str(&format!(
        "{:<width$}: {:.prec$} {}\n",
        "Demand ratio (M / MOR)",
        result.demand_ratio,
        status_icon(result.passes()),
        width = LABEL_WIDTH,
        prec = precision
    ));

    out
}

/// Render the full result record as pretty JSON.
pub fn render_json(result: &IBeamResult) -> CalcResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibeam_core::{calculate, IBeamInput};

    fn sample_result() -> IBeamResult {
        calculate(&IBeamInput {
            lower_flange_width_mm: 150.0,
            lower_flange_height_mm: 20.0,
            web_width_mm: 10.0,
            web_height_mm: 300.0,
            upper_flange_width_mm: 150.0,
            upper_flange_height_mm: 20.0,
            span_m: 6.0,
            allowable_stress_compression_mpa: 150.0,
            allowable_stress_tension_mpa: 150.0,
            applied_moment_knm: 50.0,
        })
    }

    #[test]
    fn test_text_report_layout() {
        let report = render_text(&sample_result(), 4);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "--- Analysis ---");
        assert_eq!(lines[2], "Moment of Inertia (about NA)        : 176300000.0000 mm4");
        assert_eq!(lines[5], "Moment of Resistance   (MOR)        : 155.5588 kN-m");
        assert_eq!(lines[6], "Maximum UDL across the span         : 34.5686 kN/m");
        assert_eq!(lines[8], "Maximum concentrated load at midspan: 103.7059 kN");
        assert_eq!(lines[12], "Total compressive force             : 108.4799 kN");
        assert!(lines[13].ends_with("Compression (top fiber)"));
        assert!(lines[14].ends_with("0.3214 [OK]"));
    }

    #[test]
    fn test_text_report_order() {
        let report = render_text(&sample_result(), 4);
        let tensile = report.find("Max Tensile Moment").unwrap();
        let udl = report.find("Maximum UDL").unwrap();
        let total = report.find("Maximum total load").unwrap();
        let conc = report.find("Maximum concentrated").unwrap();
        assert!(tensile < udl && udl < total && total < conc);
    }

    #[test]
    fn test_precision() {
        let report = render_text(&sample_result(), 1);
        assert!(report.contains(": 155.6 kN-m"));
    }

    #[test]
    fn test_overloaded_flagged() {
        let mut result = sample_result();
        result.demand_ratio = 1.25;
        assert!(render_text(&result, 2).contains("1.25 [FAIL]"));
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["centroid_mm"], 170.0);
        assert_eq!(value["governing_fiber"], "Compression");
    }
}

use crate::types::FlipReport;

/// The default line format: `Value: <v>` then one labelled line per flip.
pub fn format(r: &FlipReport) -> String {
    use std::fmt::Write as _;
    let mut out = String::new();
    let _ = writeln!(out, "Value: {}", r.value);
    for f in &r.flips {
        let _ = writeln!(out, "{}: {}", f.flip.label(), f.value);
    }
    out
}

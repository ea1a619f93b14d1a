use crate::types::FlipReport;

pub fn format(r: &FlipReport) -> String {
    let mut out = String::new();
    out.push_str("flip,mask,value\n");
    push_row(&mut out, "original", "", r.value);
    for f in &r.flips {
        push_row(&mut out, f.flip.name(), &format!("{:#06X}", f.mask), f.value);
    }
    out
}

fn push_row(out: &mut String, flip: &str, mask: &str, value: u16) {
    use std::fmt::Write as _;
    let _ = writeln!(out, "{},{},{}", flip, mask, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flip::FlipSet;

    #[test]
    fn header_then_rows() {
        let r = FlipReport::compute(
            100,
            FlipSet {
                even: true,
                all: true,
                ..Default::default()
            },
        );
        assert_eq!(
            format(&r),
            "flip,mask,value\noriginal,,100\neven,0x5555,21809\nall,0xFFFF,65435\n"
        );
    }
}

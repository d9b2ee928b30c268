// util.rs

use std::io::Write;

pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> std::io::Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Writes `s` without a newline and flushes, so a prompt is visible before a blocking read.
pub fn prompt_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> std::io::Result<()> {
    match write!(w, "{}", s.as_ref()).and_then(|_| w.flush()) {
        Err(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Shortest round-trip rendering, switching to exponent form for very large or very small magnitudes.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1024.0), "1024");
    }

    #[test]
    fn fractions_round_trip() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-3.25), "-3.25");
    }

    #[test]
    fn extreme_magnitudes_use_exponent() {
        assert_eq!(format_number(1e300), "1e300");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn prompt_writes_without_newline() {
        let mut out = Vec::new();
        prompt_ignore_broken_pipe(&mut out, "Enter first number: ").unwrap();
        writeln_ignore_broken_pipe(&mut out, "3").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Enter first number: 3\n");
    }
}

//! Shared formatting utilities for UI components.

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Format a coordinate for the status bar readout.
pub fn format_coord(val: f64) -> String {
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e6).contains(&abs_val) {
        format!("{:.3e}", val)
    } else {
        format!("{:.4}", val)
    }
}

/// `count` evenly spaced labels from `lo` to `hi`.
pub fn axis_labels(lo: f64, hi: f64, count: usize) -> Vec<String> {
    match count {
        0 => Vec::new(),
        1 => vec![format_axis_label(lo)],
        _ => (0..count)
            .map(|i| {
                let t = i as f64 / (count - 1) as f64;
                format_axis_label(lo + (hi - lo) * t)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_axis_label() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(2.02), "2.0");
        assert_eq!(format_axis_label(0.5), "0.50");
        assert_eq!(format_axis_label(250.0), "250");
        assert_eq!(format_axis_label(1e6), "1.0e6");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn test_axis_labels_spacing() {
        assert_eq!(axis_labels(0.0, 2.0, 3), vec!["0", "1.0", "2.0"]);
        assert_eq!(axis_labels(0.0, 2.0, 1), vec!["0"]);
        assert!(axis_labels(0.0, 2.0, 0).is_empty());
    }

    #[test]
    fn test_format_coord() {
        assert_eq!(format_coord(1.5), "1.5000");
        assert_eq!(format_coord(-0.0001), "-1.000e-4");
    }
}

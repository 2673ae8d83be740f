//! Human-readable byte-size formatting for listing display.

const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

/// Formats a byte count with a unit chosen via `floor(log_1024(size))`,
/// to two decimal places: `1024` → `"1.00 kB"`, `500` → `"500.00 B"`.
///
/// Zero is special-cased to `"0.00 B"` (the log is undefined there), and
/// sizes past the TB range stay in TB instead of running off the unit
/// table.
pub fn file_size(size: u64) -> String {
    if size == 0 {
        return "0.00 B".to_string();
    }
    let i = ((size as f64).ln() / 1024_f64.ln()).floor() as usize;
    let i = i.min(UNITS.len() - 1);
    format!("{:.2} {}", size as f64 / 1024_f64.powi(i as i32), UNITS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_unit_boundaries() {
        assert_eq!(file_size(1024), "1.00 kB");
        assert_eq!(file_size(1_048_576), "1.00 MB");
        assert_eq!(file_size(1024 * 1024 * 1024), "1.00 GB");
    }

    #[test]
    fn sub_kilobyte_stays_in_bytes() {
        assert_eq!(file_size(500), "500.00 B");
        assert_eq!(file_size(1), "1.00 B");
        assert_eq!(file_size(1023), "1023.00 B");
    }

    #[test]
    fn fractional_values() {
        assert_eq!(file_size(1536), "1.50 kB");
        assert_eq!(file_size(2048), "2.00 kB");
    }

    #[test]
    fn zero_is_special_cased() {
        assert_eq!(file_size(0), "0.00 B");
    }

    #[test]
    fn beyond_tb_clamps_to_tb() {
        // 1024^5 bytes = 1024 TB, one past the end of the unit table.
        assert_eq!(file_size(1u64 << 50), "1024.00 TB");
    }
}

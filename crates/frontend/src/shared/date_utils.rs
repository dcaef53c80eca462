/// Indonesian month abbreviations, index 0 = January
const BULAN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Format an ISO date (`2025-03-01`) for display (`01 Mar 2025`).
/// Unparseable input is returned as-is.
pub fn format_tanggal(iso: &str) -> String {
    match chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => {
            use chrono::Datelike;
            format!(
                "{:02} {} {}",
                date.day(),
                BULAN[date.month0() as usize],
                date.year()
            )
        }
        Err(_) => iso.to_string(),
    }
}

/// Today's date as the `YYYY-MM-DD` value of a date input
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tanggal() {
        assert_eq!(format_tanggal("2025-03-01"), "01 Mar 2025");
        assert_eq!(format_tanggal("2024-08-17"), "17 Agu 2024");
        assert_eq!(format_tanggal("2025-12-31"), "31 Des 2025");
    }

    #[test]
    fn test_format_tanggal_passes_through_garbage() {
        assert_eq!(format_tanggal("not-a-date"), "not-a-date");
        assert_eq!(format_tanggal(""), "");
    }
}

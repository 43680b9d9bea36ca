#[cfg(all(feature = "web"))]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

#[cfg(all(feature = "web"))]
pub fn format_local(rfc3339: &str) -> String {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_str(rfc3339));
    if d.get_time().is_nan() {
        return rfc3339.to_string();
    }
    let day = d.get_date() as i32;
    let month = (d.get_month() as i32) + 1;
    let year = d.get_full_year() as i32;
    let hour = d.get_hours() as i32;
    let minute = d.get_minutes() as i32;
    format!(
        "{}.{}.{} {}:{}",
        pad2(day),
        pad2(month),
        year,
        pad2(hour),
        pad2(minute)
    )
}

#[cfg(not(all(feature = "web")))]
pub fn format_local(rfc3339: &str) -> String {
    rfc3339.to_string()
}

/// Milliseconds since a backup's timestamp, for the "Recent Backups" list.
/// On the server we render the raw timestamp and let hydration localize it.
#[cfg(all(feature = "web"))]
pub fn millis_since(rfc3339: &str) -> Option<i64> {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_str(rfc3339));
    let t = d.get_time();
    if t.is_nan() {
        return None;
    }
    Some((Date::now() - t) as i64)
}

#[cfg(not(all(feature = "web")))]
pub fn millis_since(_rfc3339: &str) -> Option<i64> {
    None
}

/// Coarse "N units ago" label from a millisecond delta.
pub fn format_relative_ms(delta_ms: i64) -> String {
    const MINUTE: i64 = 60_000;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    if delta_ms < 0 {
        return "just now".to_string();
    }
    let unit = |n: i64, word: &str| {
        if n == 1 {
            format!("1 {} ago", word)
        } else {
            format!("{} {}s ago", n, word)
        }
    };
    if delta_ms < MINUTE {
        "just now".to_string()
    } else if delta_ms < HOUR {
        unit(delta_ms / MINUTE, "minute")
    } else if delta_ms < DAY {
        unit(delta_ms / HOUR, "hour")
    } else {
        unit(delta_ms / DAY, "day")
    }
}

/// 1024-based human size, two decimals with trailing zeroes trimmed.
pub fn format_bytes(size: f64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if size <= 0.0 {
        return "0 B".to_string();
    }
    let i = (size.ln() / 1024f64.ln()).floor() as usize;
    let i = i.min(UNITS.len() - 1);
    let scaled = size / 1024f64.powi(i as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    // Trim "12.00" to "12" and "12.50" to "12.5".
    let mut s = format!("{:.2}", rounded);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    format!("{} {}", s, UNITS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_thresholds() {
        assert_eq!(format_bytes(0.0), "0 B");
        assert_eq!(format_bytes(512.0), "512 B");
        assert_eq!(format_bytes(1024.0), "1 KB");
        assert_eq!(format_bytes(1536.0), "1.5 KB");
        assert_eq!(format_bytes(100_000_000.0), "95.37 MB");
        assert_eq!(format_bytes(1024.0 * 1024.0 * 1024.0), "1 GB");
    }

    #[test]
    fn relative_buckets() {
        assert_eq!(format_relative_ms(-5), "just now");
        assert_eq!(format_relative_ms(30_000), "just now");
        assert_eq!(format_relative_ms(60_000), "1 minute ago");
        assert_eq!(format_relative_ms(5 * 60_000), "5 minutes ago");
        assert_eq!(format_relative_ms(2 * 3_600_000), "2 hours ago");
        assert_eq!(format_relative_ms(26 * 3_600_000), "1 day ago");
        assert_eq!(format_relative_ms(3 * 86_400_000), "3 days ago");
    }
}

const SUFFIXES: [&str; 4] = ["th", "st", "nd", "rd"];

/// Escapes HTML special characters for text and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st, 112th.
pub fn ordinal(n: i64) -> String {
    let v = n % 100;
    let suffix = match (v - 20) % 10 {
        i @ 0..=3 => SUFFIXES[i as usize],
        _ => match v {
            0..=3 => SUFFIXES[v as usize],
            _ => SUFFIXES[0],
        },
    };
    format!("{}{}", n, suffix)
}

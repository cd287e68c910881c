/// Formats a number of seconds for display: "1 h 5 min", "12 min" or "40 seg".
///
/// Minutes are truncated, never rounded.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{} h {} min", hours, minutes)
    } else if minutes > 0 {
        format!("{} min", minutes)
    } else {
        format!("{} seg", seconds)
    }
}

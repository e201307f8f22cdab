//! Memory size formatting for the `-m` flag.

const KIB: i64 = 1024;
const MIB: i64 = KIB * 1024;
const GIB: i64 = MIB * 1024;

/// Formats a byte count with the largest unit that represents it exactly.
///
/// Tries `g`, then `m`, then `k`; a unit qualifies when the value is at
/// least one of it and divides evenly. Anything else is printed in bytes
/// with a `b` suffix.
#[must_use]
pub fn format_memory(bytes: i64) -> String {
    for (unit, suffix) in [(GIB, 'g'), (MIB, 'm'), (KIB, 'k')] {
        if bytes >= unit && bytes % unit == 0 {
            return format!("{}{suffix}", bytes / unit);
        }
    }
    format!("{bytes}b")
}

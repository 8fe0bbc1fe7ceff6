use crate::domain::models::size::{SizeUnit, SizeValue};

const SCALE: u64 = 1000;
const UNITS: [SizeUnit; 3] = [SizeUnit::Bytes, SizeUnit::Kilobytes, SizeUnit::Megabytes];

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scales `bytes` to the largest unit (up to MB) it reaches, base 1000.
pub fn to_human_size(bytes: u64) -> SizeValue {
    if bytes == 0 {
        return SizeValue::new(0.0, SizeUnit::Bytes);
    }

    let mut index = 0;
    let mut divisor = 1u64;
    while index + 1 < UNITS.len() && bytes / divisor >= SCALE {
        divisor *= SCALE;
        index += 1;
    }

    SizeValue::new(round_to_hundredths(bytes as f64 / divisor as f64), UNITS[index])
}

/// Always expresses `bytes` in KB.
pub fn to_kilobytes(bytes: u64) -> SizeValue {
    SizeValue::new((bytes as f64 / 10.0).round() / 100.0, SizeUnit::Kilobytes)
}

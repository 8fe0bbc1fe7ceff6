use crate::domain::models::audit::AuditRatio;

/// `total_up / total_down` rounded to one decimal; `Undefined` when nothing
/// was received.
pub fn audit_ratio(total_up: u64, total_down: u64) -> AuditRatio {
    if total_down == 0 {
        return AuditRatio::Undefined;
    }
    AuditRatio::Defined((total_up as f64 / total_down as f64 * 10.0).round() / 10.0)
}

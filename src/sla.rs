/// Maximum cumulative SLA credit a single service could have earned by round
/// `round_num`. Each round's check contributes one more point than the last
/// until the flag lifetime caps the ramp at `flag_lifetime + 1`, so the sum is
/// a triangular ramp that saturates once the lifetime is exceeded.
pub fn expected_sla(round_num: u32, flag_lifetime: u32) -> u64 {
    (0..round_num)
        .map(|r| u64::from((r + 1).min(flag_lifetime + 1)))
        .sum()
}

/// Fraction of the expected SLA credit actually obtained, formatted with two
/// decimal places. Negative scores clamp to zero. Returns `None` when nothing
/// could have been earned yet (`expected == 0`, i.e. before the first round),
/// so callers never see a non-finite percentage.
pub fn sla_percentage(obtained: f64, expected: u64) -> Option<String> {
    if expected == 0 {
        return None;
    }
    let obtained = obtained.max(0.0);
    Some(format!("{:.2}", obtained / expected as f64 * 100.0))
}

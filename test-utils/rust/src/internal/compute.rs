use litesvm::types::TransactionMetadata;

/// Units reported by the outermost program invocation
pub fn get_compute_units(metadata: &TransactionMetadata) -> u64 {
    metadata
        .logs
        .iter()
        .rev()
        .find_map(|log| parse_compute_units(log))
        .unwrap_or(metadata.compute_units_consumed)
}

/// Format: "Program X consumed Y of Z compute units"
fn parse_compute_units(log: &str) -> Option<u64> {
    let mut parts = log.split_whitespace();
    parts.find(|part| *part == "consumed")?;
    parts.next()?.parse().ok()
}

use folio_core::agent::ArtifactKind;
use folio_core::config::AgentIds;

/// One block per agent: label, name, configured id and purpose.
pub fn catalog(ids: &AgentIds) -> String {
    ArtifactKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "{:<10} {} ({})\n           {}",
                kind.label(),
                kind.agent_name(),
                ids.for_kind(*kind),
                kind.agent_purpose()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

use redb::TableDefinition;

/// Snapshots table: storage key -> serialized collection snapshot (JSON)
pub const SNAPSHOTS: TableDefinition<&str, &[u8]> = TableDefinition::new("snapshots");

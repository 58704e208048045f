pub struct Icons;

impl Icons {
    pub const PACKAGE: &str = "📦";
    pub const TRUCK: &str = "🚚";
    pub const INVENTORY: &str = "🗃️";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const BROOM: &str = "🧹";
}

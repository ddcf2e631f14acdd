use uuid::Uuid;

/// Generates unique tracking tokens for processed orders
pub struct TrackingGenerator {
    prefix: String,
}

impl TrackingGenerator {
    pub fn new() -> Self {
        Self::with_prefix("ORVIA")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Generate a unique tracking token
    pub fn generate(&self) -> String {
        // Format: {prefix}-{timestamp}-{short_uuid}
        let timestamp = chrono::Utc::now().timestamp();
        let short_id = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
        format!("{}-{}-{}", self.prefix, timestamp, short_id)
    }
}

impl Default for TrackingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

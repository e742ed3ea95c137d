//! Topic subscription configuration.

/// Advisory transport-level compression hint for a subscription.
///
/// Part of the uniform subscription configuration shared by all marker-type
/// clients; it only affects message types with embedded image payloads and
/// is ignored by the transport otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    #[default]
    None,
    Png,
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Png => write!(f, "png"),
        }
    }
}

/// Configuration of a single topic subscription.
#[derive(Debug, Clone)]
pub struct TopicConfig {
    /// The ROS2 topic name (e.g., `/robot/pose`).
    pub name: String,

    /// The ROS2 message type name published on the topic.
    pub message_type: String,

    /// Advisory compression hint.
    pub compression: Compression,
}

impl TopicConfig {
    pub fn new(name: impl Into<String>, message_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message_type: message_type.into(),
            compression: Compression::None,
        }
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Zenoh key expression matching data samples of this topic under
    /// `rmw_zenoh`.
    ///
    /// Data keys have the form `<domain_id>/<topic>/<dds_type>/<type_hash>`;
    /// for an explicitly named topic the type segments are wildcarded.
    pub fn key_expr(&self, domain_id: u32) -> String {
        format!("{}/{}/**", domain_id, self.name.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_expr() {
        let config = TopicConfig::new("/robot/pose", "geometry_msgs::msg::PoseStamped");
        assert_eq!(config.key_expr(0), "0/robot/pose/**");
        assert_eq!(config.key_expr(42), "42/robot/pose/**");
    }

    #[test]
    fn test_key_expr_without_leading_slash() {
        let config = TopicConfig::new("tf", "tf2_msgs::msg::TFMessage");
        assert_eq!(config.key_expr(0), "0/tf/**");
    }

    #[test]
    fn test_compression_hint() {
        let config = TopicConfig::new("/p", "t").with_compression(Compression::Png);
        assert_eq!(config.compression.to_string(), "png");
    }
}

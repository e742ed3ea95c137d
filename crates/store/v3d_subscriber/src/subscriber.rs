//! Per-topic Zenoh subscriber management.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::mpsc;
use zenoh::Wait as _;

use crate::message::TopicMessage;
use crate::session::RosSession;
use crate::topic::{Compression, TopicConfig};

/// Channel capacity for incoming messages (applies backpressure when full).
const MESSAGE_CHANNEL_CAPACITY: usize = 4096;

/// Manages subscriptions to individual topics.
///
/// Each subscribed topic gets its own Zenoh subscriber whose lifetime is
/// tied to the subscription. Received payloads are forwarded through a
/// bounded mpsc channel as [`TopicMessage`]s.
pub struct SubscriptionManager {
    session: Arc<RosSession>,
    domain_id: u32,
    subscribers: HashMap<String, zenoh::pubsub::Subscriber<()>>,
    message_tx: mpsc::Sender<TopicMessage>,
    message_rx: Option<mpsc::Receiver<TopicMessage>>,
}

impl SubscriptionManager {
    /// Create a new subscription manager for the given ROS2 domain.
    pub fn new(session: Arc<RosSession>, domain_id: u32) -> Self {
        let (tx, rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        Self {
            session,
            domain_id,
            subscribers: HashMap::new(),
            message_tx: tx,
            message_rx: Some(rx),
        }
    }

    /// Take the message receiver. Can only be called once.
    pub fn take_message_receiver(&mut self) -> Option<mpsc::Receiver<TopicMessage>> {
        self.message_rx.take()
    }

    /// Subscribe to a topic.
    pub fn subscribe(&mut self, config: &TopicConfig) -> anyhow::Result<()> {
        if self.subscribers.contains_key(&config.name) {
            tracing::warn!("Already subscribed to {}", config.name);
            return Ok(());
        }

        let topic_name = config.name.clone();
        let type_name = config.message_type.clone();
        let tx = self.message_tx.clone();
        let key_expr = config.key_expr(self.domain_id);

        tracing::info!("Subscribing to {topic_name} ({type_name})");
        if config.compression != Compression::None {
            // advisory only; plain CDR payloads are delivered uncompressed
            tracing::debug!(
                "Compression hint '{}' requested for {topic_name}",
                config.compression
            );
        }

        let subscriber = self
            .session
            .session()
            .declare_subscriber(&key_expr)
            .callback(move |sample| {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_nanos() as u64;

                let msg = TopicMessage {
                    topic_name: topic_name.clone(),
                    type_name: type_name.clone(),
                    payload: sample.payload().to_bytes().to_vec(),
                    receive_time_ns: now,
                };

                if tx.try_send(msg).is_err() {
                    tracing::debug!("Message channel full or receiver dropped");
                }
            })
            .wait()
            .map_err(|e| anyhow::anyhow!("Failed to create subscriber for {key_expr}: {e}"))?;

        self.subscribers.insert(config.name.clone(), subscriber);
        tracing::info!("Subscribed to {}", config.name);

        Ok(())
    }

    /// Unsubscribe from a topic. Dropping the subscriber closes the
    /// subscription.
    pub fn unsubscribe(&mut self, topic_name: &str) {
        if self.subscribers.remove(topic_name).is_some() {
            tracing::info!("Unsubscribed from {topic_name}");
        } else {
            tracing::warn!("Not subscribed to {topic_name}");
        }
    }

    /// Check if a topic is currently subscribed.
    pub fn is_subscribed(&self, topic_name: &str) -> bool {
        self.subscribers.contains_key(topic_name)
    }

    /// Get the list of currently subscribed topic names.
    pub fn subscribed_topics(&self) -> Vec<String> {
        self.subscribers.keys().cloned().collect()
    }

    /// Unsubscribe from all topics.
    pub fn unsubscribe_all(&mut self) {
        let topics: Vec<String> = self.subscribers.keys().cloned().collect();
        for topic in topics {
            self.unsubscribe(&topic);
        }
    }
}

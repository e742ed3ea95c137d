//! A client for displaying poses from a `PoseStamped` topic.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use v3d_msgs::cdr;
use v3d_msgs::geometry_msgs::PoseStamped;
use v3d_msgs::POSE_STAMPED_TYPE;
use v3d_scene::{FrameTrackingNode, MeshLoader, NodeKey, Scene, TfClient};
use v3d_subscriber::{Compression, RosSession, SubscriptionManager, TopicConfig, TopicMessage};

use crate::listeners::{ListenerId, ListenerSet};
use crate::marker::{Marker, MarkerKey};
use crate::pose::{MarkerOptions, PoseMarker};

/// Construction options for [`PoseTopicClient`].
#[derive(Debug, Clone, Default)]
pub struct PoseClientOptions {
    /// The topic to listen to.
    pub topic: String,

    /// Root object displayed markers are attached to; a fresh empty node is
    /// spawned when unset.
    pub root_object: Option<NodeKey>,

    /// Base path for any meshes that will be loaded.
    pub path: Option<String>,

    /// The Collada loader to use for mesh files.
    pub loader: Option<MeshLoader>,
}

/// One displayed pose: the renderable and its frame-tracking wrapper.
struct DisplayedPose {
    #[expect(dead_code, reason = "owns the renderable attached under the wrapper")]
    marker: PoseMarker,
    wrapper: FrameTrackingNode,
}

/// Subscribes to a pose topic and displays the latest pose per
/// namespace + identifier key as an arrow anchored to the message's frame.
///
/// Messages are handled one at a time by a single consumer; every handled
/// message replaces the displayed pose for its key and emits a change
/// notification to registered listeners.
pub struct PoseTopicClient {
    scene: Scene,
    root: NodeKey,
    tf_client: Arc<TfClient>,
    topic: String,
    path: Option<String>,
    loader: Option<MeshLoader>,
    poses: HashMap<MarkerKey, DisplayedPose>,
    listeners: ListenerSet,
    subscription: Option<SubscriptionManager>,
    messages: Option<mpsc::Receiver<TopicMessage>>,
}

impl PoseTopicClient {
    /// Create a client over the given scene without opening a subscription.
    pub fn new(mut scene: Scene, tf_client: Arc<TfClient>, options: PoseClientOptions) -> Self {
        let root = options
            .root_object
            .filter(|&key| scene.contains(key))
            .unwrap_or_else(|| scene.spawn_group());
        Self {
            scene,
            root,
            tf_client,
            topic: options.topic,
            path: options.path,
            loader: options.loader,
            poses: HashMap::new(),
            listeners: ListenerSet::new(),
            subscription: None,
            messages: None,
        }
    }

    /// Open the topic subscription on `session`.
    ///
    /// The subscription is configured with the pose-stamped message type and
    /// the advisory `png` compression hint used uniformly across marker
    /// clients (it does not apply to this payload).
    pub fn open_subscription(
        &mut self,
        session: Arc<RosSession>,
        domain_id: u32,
    ) -> anyhow::Result<()> {
        let mut manager = SubscriptionManager::new(session, domain_id);
        let config = TopicConfig::new(self.topic.clone(), POSE_STAMPED_TYPE)
            .with_compression(Compression::Png);
        manager.subscribe(&config)?;

        self.messages = manager.take_message_receiver();
        self.subscription = Some(manager);
        Ok(())
    }

    /// Receive the next raw message from the subscription, if one is open.
    pub async fn recv(&mut self) -> Option<TopicMessage> {
        match &mut self.messages {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }

    /// Decode a CDR payload and display it.
    pub fn process_payload(&mut self, payload: &[u8]) -> anyhow::Result<()> {
        let message = cdr::try_decode_message::<PoseStamped>(payload)?;
        self.handle_message(&message);
        Ok(())
    }

    /// Display one pose message.
    ///
    /// Replaces whatever pose is currently displayed under the message's
    /// namespace + identifier key: the old wrapper node is detached from the
    /// root (and reclaimed), the new renderable is wrapped in a
    /// frame-tracking node bound to the message's frame, attached, and
    /// listeners are notified.
    pub fn handle_message(&mut self, message: &PoseStamped) {
        let marker = PoseMarker::new(
            &mut self.scene,
            message,
            MarkerOptions {
                path: self.path.clone(),
                loader: self.loader,
            },
        );

        let key = MarkerKey::new(message.ns.clone(), message.id.clone());

        if let Some(old) = self.poses.remove(&key) {
            tracing::debug!("Replacing displayed pose {key}");
            self.scene.detach(old.wrapper.node());
            self.scene.despawn_subtree(old.wrapper.node());
        }

        let wrapper =
            FrameTrackingNode::new(&mut self.scene, message.header.frame_id.clone(), marker.node());
        wrapper.sync(&mut self.scene, self.tf_client.as_ref());

        self.scene.attach(self.root, wrapper.node());
        self.poses.insert(key, DisplayedPose { marker, wrapper });

        self.listeners.notify();
    }

    /// Re-synchronize every displayed wrapper with its coordinate frame.
    pub fn sync_frames(&mut self) {
        for displayed in self.poses.values() {
            displayed.wrapper.sync(&mut self.scene, self.tf_client.as_ref());
        }
    }

    /// Register a change listener; fired once per handled message, after the
    /// scene mutation is complete.
    pub fn on_change(&mut self, listener: impl FnMut() + Send + 'static) -> ListenerId {
        self.listeners.register(listener)
    }

    /// Unregister a change listener.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Whether a topic subscription is currently open.
    pub fn has_subscription(&self) -> bool {
        self.subscription.is_some()
    }

    /// The root object displayed markers hang under.
    pub fn root_object(&self) -> NodeKey {
        self.root
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Number of currently displayed poses.
    pub fn displayed_count(&self) -> usize {
        self.poses.len()
    }

    /// Wrapper node of the pose displayed under `key`, if any.
    pub fn wrapper_node(&self, key: &MarkerKey) -> Option<NodeKey> {
        self.poses.get(key).map(|d| d.wrapper.node())
    }
}

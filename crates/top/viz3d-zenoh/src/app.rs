//! Application lifecycle management.

use std::sync::Arc;
use std::time::Duration;

use v3d_markers::{apply_tf_message, PoseClientOptions, PoseTopicClient};
use v3d_msgs::cdr;
use v3d_msgs::tf2_msgs::TFMessage;
use v3d_msgs::TF_MESSAGE_TYPE;
use v3d_scene::{Scene, TfClient};
use v3d_subscriber::{RosSession, SubscriptionManager, TopicConfig};

use crate::cli::Cli;

/// How often displayed wrappers are re-synchronized with their frames.
const FRAME_SYNC_INTERVAL: Duration = Duration::from_millis(100);

/// Run the viz3d-zenoh application.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    // Build Zenoh configuration
    let mut zenoh_config = if let Some(config_path) = &cli.zenoh_config {
        zenoh::Config::from_file(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to load Zenoh config from {config_path}: {e}"))?
    } else {
        zenoh::Config::default()
    };

    if let Some(endpoint) = &cli.zenoh_connect {
        zenoh_config
            .insert_json5("connect/endpoints", &format!("[\"{endpoint}\"]"))
            .map_err(|e| anyhow::anyhow!("Failed to set Zenoh connect endpoint: {e}"))?;
    }

    if let Some(endpoint) = &cli.zenoh_listen {
        zenoh_config
            .insert_json5("listen/endpoints", &format!("[\"{endpoint}\"]"))
            .map_err(|e| anyhow::anyhow!("Failed to set Zenoh listen endpoint: {e}"))?;
    }

    // Apply the session mode (peer or client)
    zenoh_config
        .insert_json5("mode", &format!("\"{}\"", cli.zenoh_mode))
        .map_err(|e| anyhow::anyhow!("Failed to set Zenoh mode: {e}"))?;

    // Connect to Zenoh
    let session = Arc::new(RosSession::connect(zenoh_config).await?);

    // Shared latest-value frame store, fed from the TF topic
    let tf_client = Arc::new(TfClient::new());
    let mut tf_manager = SubscriptionManager::new(Arc::clone(&session), cli.domain_id);
    tf_manager.subscribe(&TopicConfig::new(cli.tf_topic.clone(), TF_MESSAGE_TYPE))?;
    let mut tf_rx = tf_manager
        .take_message_receiver()
        .expect("Message receiver should be available");

    // One display client per pose topic, each driven by its own task
    let mut tasks = Vec::new();
    for topic in &cli.topic {
        let mut client = PoseTopicClient::new(
            Scene::new(),
            Arc::clone(&tf_client),
            PoseClientOptions {
                topic: topic.clone(),
                path: cli.mesh_path.clone(),
                ..Default::default()
            },
        );
        client.open_subscription(Arc::clone(&session), cli.domain_id)?;

        let topic_name = topic.clone();
        client.on_change(move || {
            tracing::trace!("Pose display changed on {topic_name}");
        });

        tasks.push(tokio::spawn(run_pose_client(client)));
    }

    println!(
        "Subscribed to {} pose topics (domain {}).",
        cli.topic.len(),
        cli.domain_id
    );
    println!("Press Ctrl+C to stop.\n");

    let mut tf_count: u64 = 0;
    let start_time = std::time::Instant::now();

    loop {
        tokio::select! {
            Some(msg) = tf_rx.recv() => {
                match cdr::try_decode_message::<TFMessage>(&msg.payload) {
                    Ok(tf_msg) => apply_tf_message(&tf_client, &tf_msg),
                    Err(e) => {
                        tracing::warn!("Failed to decode TF message on {}: {e}", msg.topic_name);
                    }
                }
                tf_count += 1;

                // Periodic status
                if tf_count % 1000 == 0 {
                    let elapsed = start_time.elapsed().as_secs_f64();
                    let rate = tf_count as f64 / elapsed;
                    tracing::info!(
                        "Processed {tf_count} TF messages ({rate:.0} msgs/sec), \
                         {} frames known",
                        tf_client.frame_count()
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("\nShutting down...");
                break;
            }
        }
    }

    // Cleanup
    for task in &tasks {
        task.abort();
    }
    tf_manager.unsubscribe_all();

    let elapsed = start_time.elapsed().as_secs_f64();
    println!("Processed {tf_count} TF messages in {elapsed:.1}s");

    Ok(())
}

/// Drive one pose client: display incoming messages and keep its displayed
/// wrappers synchronized with their frames.
async fn run_pose_client(mut client: PoseTopicClient) {
    let mut sync_interval = tokio::time::interval(FRAME_SYNC_INTERVAL);

    loop {
        tokio::select! {
            maybe_msg = client.recv() => {
                match maybe_msg {
                    Some(msg) => {
                        if let Err(e) = client.process_payload(&msg.payload) {
                            tracing::warn!(
                                "Failed to process pose on {}: {e}",
                                client.topic()
                            );
                        }
                    }
                    // subscription closed
                    None => break,
                }
            }
            _ = sync_interval.tick() => {
                client.sync_frames();
            }
        }
    }
}

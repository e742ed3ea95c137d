//! Command-line interface for the viz3d-zenoh viewer.

use clap::Parser;

/// Native Zenoh pose visualization for ROS2.
///
/// Connects directly to a Zenoh network to subscribe to pose topics published
/// via `rmw_zenoh`, without requiring any DDS bridge.
#[derive(Parser, Debug)]
#[command(name = "viz3d-zenoh", version, about)]
pub struct Cli {
    /// Path to a Zenoh configuration file (JSON5 format).
    #[arg(long)]
    pub zenoh_config: Option<String>,

    /// Zenoh router endpoint to connect to (e.g., `tcp/192.168.1.100:7447`).
    #[arg(long)]
    pub zenoh_connect: Option<String>,

    /// Zenoh listener endpoint for peer mode (e.g., `tcp/0.0.0.0:7447`).
    #[arg(long)]
    pub zenoh_listen: Option<String>,

    /// Zenoh session mode: `peer` or `client`.
    #[arg(long, default_value = "peer")]
    pub zenoh_mode: String,

    /// ROS2 domain ID.
    #[arg(long, default_value = "0")]
    pub domain_id: u32,

    /// ROS2 topic carrying frame transforms.
    #[arg(long, default_value = "/tf")]
    pub tf_topic: String,

    /// Base path for mesh files referenced by markers.
    #[arg(long)]
    pub mesh_path: Option<String>,

    /// Pose topics to display (can be repeated).
    #[arg(long, short = 't', default_value = "/pose")]
    pub topic: Vec<String>,
}

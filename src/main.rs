//! Luxmesh node daemon
//!
//! Wires the coordination engine to the real multicast transport, a simulated
//! light sensor, and a log-rendered level bar, then drives the poll loop until
//! shutdown or a swarm-wide reset.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use luxmesh::core::{Error, Result, SwarmConfig, MAX_LIGHT_VALUE};
use luxmesh::network::MulticastTransport;
use luxmesh::swarm::{Coordinator, Step};
use luxmesh::time::MonotonicClock;

/// Height steps on the indicator bar
const BAR_STEPS: u16 = 8;

/// Light units per bar step
const LIGHT_STEP: u16 = MAX_LIGHT_VALUE / BAR_STEPS;

/// Stand-in for the photocell: a triangle wave over the sensor range,
/// phase-shifted per identity so co-located nodes disagree
struct SimulatedSensor {
    origin: Instant,
    phase_ms: u64,
}

impl SimulatedSensor {
    /// Sweep period of the simulated reading
    const PERIOD_MS: u64 = 60_000;

    fn for_identity(identity: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        identity.hash(&mut hasher);
        SimulatedSensor {
            origin: Instant::now(),
            phase_ms: hasher.finish() % Self::PERIOD_MS,
        }
    }

    fn sample(&self) -> u16 {
        let t = (self.origin.elapsed().as_millis() as u64 + self.phase_ms) % Self::PERIOD_MS;
        let half = Self::PERIOD_MS / 2;
        let ramp = if t < half { t } else { Self::PERIOD_MS - t };
        (ramp * u64::from(MAX_LIGHT_VALUE) / half) as u16
    }
}

/// Log-rendered stand-in for the LED level bar
#[derive(Default)]
struct LevelBar {
    last: Option<(bool, u16)>,
}

impl LevelBar {
    fn render(&mut self, is_master: bool, light_value: u16) {
        let height = (light_value / LIGHT_STEP).min(BAR_STEPS - 1);
        if self.last == Some((is_master, height)) {
            return;
        }
        self.last = Some((is_master, height));
        debug!(height, master = is_master, "indicator");
    }

    fn clear(&mut self) {
        self.last = None;
        debug!("indicator cleared");
    }
}

/// Terminal restart capability: replaces this process with a fresh image of
/// itself, so the node re-bootstraps from cold start
fn restart() -> ! {
    use std::os::unix::process::CommandExt;

    match std::env::current_exe() {
        Ok(exe) => {
            let err = std::process::Command::new(exe)
                .args(std::env::args_os().skip(1))
                .exec();
            error!(error = %err, "restart exec failed");
        }
        Err(e) => error!(error = %e, "restart failed to resolve executable"),
    }
    std::process::exit(1);
}

fn load_config() -> Result<SwarmConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            serde_json::from_str(&text)
                .map_err(|e| Error::config(format!("failed to parse {}: {}", path, e)))
        }
        None => Ok(SwarmConfig::default()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    info!(
        version = luxmesh::VERSION,
        group = %config.multicast_group,
        port = config.port,
        "starting luxmesh node"
    );

    // Transport bring-up is the one hard-fail path
    let transport = MulticastTransport::open(&config)?;
    let identity = transport.identity().to_string();
    let sensor = SimulatedSensor::for_identity(&identity);
    let mut bar = LevelBar::default();
    let poll_interval = Duration::from_millis(config.poll_interval_ms);
    let mut node = Coordinator::new(identity, config, MonotonicClock::new(), transport);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                return Ok(());
            }
            _ = tokio::time::sleep(poll_interval) => {}
        }

        match node.poll(sensor.sample())? {
            Step::Discovering | Step::Draining { .. } => {}
            Step::Running {
                is_master,
                light_value,
            } => bar.render(is_master, light_value),
            Step::RestartDue => {
                bar.clear();
                info!("restarting");
                restart();
            }
        }
    }
}

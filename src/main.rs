use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use swarmopt::observers::{DebugObserver, TrackingSwarmObserver};
use swarmopt::prelude::*;
use swarmopt::test_functions::Himmelblau;
use swarmopt::CtrlCAbortSignal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs are controlled through RUST_LOG (e.g. RUST_LOG=swarmopt=debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // 40 particles on Himmelblau's function within [-5, 5] x [-5, 5]
    let pso = SwarmOptimizer::new(Himmelblau, 2, 40, (-5.0, 5.0), PSOConfig::default(), 0)?;

    // Create a tracker to record swarm history
    let tracker = TrackingSwarmObserver::build();

    let mut m = SwarmMinimizer::new(pso)
        .with_observer(tracker.clone())
        .with_observer(std::sync::Arc::new(parking_lot::RwLock::new(DebugObserver)))
        .with_abort_signal(CtrlCAbortSignal::new());

    let summary = m.minimize();
    println!("{}", summary);

    // Export the results to a Python .pkl file to visualize via matplotlib
    let mut writer = BufWriter::new(File::create(Path::new("swarm_history.pkl"))?);
    serde_pickle::to_writer(&mut writer, &*tracker.read(), Default::default())?;
    Ok(())
}

use loraguard_probe::{Probe, ProbeConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut probe = Probe::new(ProbeConfig::default(), std::io::stdout())?;
    probe.run().await?;
    Ok(())
}

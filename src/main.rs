use robot_viewer::{ViewerApp, ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = ViewerApp::new(ViewerConfig::default())?;
    app.run()?;

    Ok(())
}

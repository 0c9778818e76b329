use sporeling::config::CardConfig;
use sporeling::error::CardError;
use sporeling::window::CardApp;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> Result<(), CardError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CardConfig::default();
    log::info!(
        "sporeling: {} particles, {} ornaments, scatter radius {}",
        config.particle_count,
        config.ornament_count,
        config.scatter_radius
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = CardApp::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

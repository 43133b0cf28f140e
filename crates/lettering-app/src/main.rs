//! Demo entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Lettering demo");

    let path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    if let Err(e) = run(path.as_deref()) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "native")]
fn run(path: Option<&std::path::Path>) -> lettering_app::DemoResult<()> {
    let config = lettering_app::load_config(path)?;
    let context = lettering_render::VelloContext::new(config.style.clone());

    let draws = lettering_app::draw_panel(&context, &config)?;
    let scene = context.take_scene()?;
    let encoding = scene.encoding();
    log::info!(
        "Encoded {} text draws into the scene ({} paths, {} path segments)",
        draws,
        encoding.n_paths,
        encoding.n_path_segments
    );
    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}

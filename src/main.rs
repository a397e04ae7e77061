use macroquad::window::Conf;
use torus_life::{App, LifeConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    let window = LifeConfig::default().window;
    Conf {
        window_title: window.title,
        window_width: window.width,
        window_height: window.height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Space: play/pause | Click: birth | G: glider | N: step | C: clear | R: random | Esc: quit");

    let config = LifeConfig::default();
    let app = match App::new(&config) {
        Ok(app) => app,
        Err(err) => {
            error!(%err, "failed to initialize");
            std::process::exit(1);
        }
    };

    app.run().await;
}

use anyhow::Result;
use folio::app::Portfolio;
use folio::constants::DEFAULT_WINDOW_SIZE;
use gpui::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    Application::new().run(|cx: &mut App| {
        gpui_component::init(cx);

        let (width, height) = DEFAULT_WINDOW_SIZE;
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Folio".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(options, |window, cx| {
            cx.new(|cx| Portfolio::new(window, cx))
        }) {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}

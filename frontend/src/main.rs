use crate::app::App;
use gloo_console::{error, log};

mod api;
mod app;
mod components;
mod context;
mod pages;
mod query;
mod toast;

/// Static screen shown when rendering dies with a panic. The whole UI is
/// replaced; the only recovery offered is a full reload.
const FALLBACK_HTML: &str = r#"
<div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem; background: #1a1625; color: #fff; font-family: system-ui, sans-serif">
  <div style="max-width: 600px; padding: 2rem; background: rgba(255,255,255,0.05); border-radius: 1rem; border: 1px solid rgba(255,255,255,0.1)">
    <h1 style="font-size: 2rem; margin-bottom: 1rem">Failed to Load Application</h1>
    <p style="margin-bottom: 1.5rem; color: rgba(255,255,255,0.7)">
      We encountered a critical error. Please try refreshing the page.
    </p>
    <button onclick="window.location.reload()" style="padding: 0.75rem 1.5rem; border: none; border-radius: 0.5rem; background: #9b87f5; color: #fff; font-weight: 600; cursor: pointer">
      Reload Page
    </button>
  </div>
</div>
"#;

fn install_fallback_screen() {
    std::panic::set_hook(Box::new(|info| {
        error!(format!("fatal render error: {info}"));
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            body.set_inner_html(FALLBACK_HTML);
        }
    }));
}

fn main() {
    install_fallback_screen();
    log!("starting agency site");
    yew::Renderer::<App>::new().render();
}

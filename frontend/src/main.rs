mod config;
mod theme;
mod components {
    pub mod contact_form;
    pub mod logo;
    pub mod reveal;
    pub mod wave_background;
}
mod pages {
    pub mod landing;
}
mod utils {
    pub mod motion;
}

use pages::landing::Landing;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Dishcovery starting, assets from '{}/'", config::get_asset_root());
    // One page on every path, so sub-path deployments and /index.html work.
    yew::Renderer::<Landing>::new().render();
}

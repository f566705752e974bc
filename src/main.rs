/// Demo entry point
///
/// Mounts the gallery app when built for the browser with the `csr` feature
/// (e.g. via Trunk). Without it there is nothing to run.

#[cfg(feature = "csr")]
pub fn main() {
    use leptos_button::app::App;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to init logging");

    log::info!("mounting button gallery");
    leptos::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // client-side only; build with --features csr
}

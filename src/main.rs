//! Browser entry point. Native builds compile this to an empty `main` so
//! `cargo test` can run the crate's host-side tests without the WASM stack.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(vestibule::app::App);
    }
}

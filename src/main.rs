pub fn main() {
    #[cfg(target_arch = "wasm32")]
    leptos::prelude::mount_to_body(neevcode_admin::app::App);
}

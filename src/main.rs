mod app;
mod clock;
mod components;
mod console;
mod models;
mod pages;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

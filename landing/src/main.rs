use leptos::prelude::*;
use newcastle_vet_landing::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");
    leptos::mount::mount_to_body(|| view! { <App /> });
}

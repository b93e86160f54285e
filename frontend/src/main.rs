use leptos::*;

use frontend::App;

fn main() {
    mount_to_body(|| {
        view! {
            <App />
        }
    })
}

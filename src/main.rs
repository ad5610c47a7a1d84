use leptos::mount::mount_to_body;
use leptos::prelude::*;
use payment_flow_canvas::{App, init_logging};

fn main() {
	init_logging();

	mount_to_body(|| {
		view! { <App /> }
	})
}

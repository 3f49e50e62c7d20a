use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    dioxus::launch(pokesearch_web::App);
}

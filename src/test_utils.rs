#[cfg(test)]
pub mod test_helpers {
    use std::io::Write;
    use std::net::SocketAddr;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::sync::{Arc, Mutex};

    use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Frame, Terminal, backend::TestBackend};
    use serde_json::Value;
    use tempfile::NamedTempFile;

    use crate::app::App;
    use crate::assistant::{AssistantRequest, AssistantResponse};
    use crate::catalog::{CatalogLoader, Product};
    use crate::config::Config;

    /// Five products across three categories, first seen in the order
    /// cleanser, moisturizer, haircare
    pub const TEST_CATALOG: &str = r#"{
        "products": [
            {
                "id": 1,
                "name": "Foaming Facial Cleanser",
                "brand": "CeraVe",
                "category": "cleanser",
                "image": "https://example.com/cerave-cleanser.png",
                "description": "Gentle foaming cleanser with ceramides and niacinamide for normal to oily skin."
            },
            {
                "id": 2,
                "name": "Daily Moisturizing Lotion",
                "brand": "CeraVe",
                "category": "moisturizer",
                "image": "https://example.com/cerave-lotion.png",
                "description": "Lightweight lotion with hyaluronic acid that hydrates all day."
            },
            {
                "id": 3,
                "name": "Smooth & Silky Shampoo",
                "brand": "Garnier",
                "category": "haircare",
                "image": "https://example.com/garnier-shampoo.png"
            },
            {
                "id": 4,
                "name": "Micellar Cleansing Water",
                "brand": "Garnier",
                "category": "cleanser",
                "image": "https://example.com/garnier-micellar.png",
                "description": "Removes makeup and dirt without rinsing."
            },
            {
                "id": 5,
                "name": "Hydro Boost Gel Cream",
                "brand": "Neutrogena",
                "category": "moisturizer",
                "image": "https://example.com/neutrogena-gel.png",
                "description": "Oil-free gel cream that quenches dry skin."
            }
        ]
    }"#;

    pub fn test_products() -> Vec<Product> {
        CatalogLoader::parse(TEST_CATALOG).unwrap()
    }

    /// Minimal product with placeholder brand, category and image
    pub fn product(id: u32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            brand: "Test Brand".to_string(),
            category: "cleanser".to_string(),
            image: "img.png".to_string(),
            description: None,
        }
    }

    /// Write the test catalog to a temp file kept alive by the caller
    pub fn catalog_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    /// App wired to in-memory channels instead of the assistant worker
    pub struct TestApp {
        pub app: App,
        pub requests: Receiver<AssistantRequest>,
        pub responses: Sender<AssistantResponse>,
        pub catalog: NamedTempFile,
    }

    pub fn test_app() -> TestApp {
        let catalog = catalog_file(TEST_CATALOG);
        let loader = CatalogLoader::new(catalog.path());
        let products = loader.load().unwrap();

        let (request_tx, requests) = mpsc::channel();
        let (responses, response_rx) = mpsc::channel();

        let mut app = App::new(loader, &products, &Config::default());
        app.set_channels(request_tx, response_rx);

        TestApp {
            app,
            requests,
            responses,
            catalog,
        }
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn render_widget_to_string(
        width: u16,
        height: u16,
        draw: impl FnOnce(&mut Frame),
    ) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();
        terminal.backend().to_string()
    }

    /// Completion response body carrying a single reply
    pub fn completion_body(text: &str) -> String {
        serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": text } }
            ]
        })
        .to_string()
    }

    #[derive(Clone)]
    struct MockState {
        status: StatusCode,
        body: String,
        received: Arc<Mutex<Vec<Value>>>,
    }

    /// Local completion endpoint answering every POST with a fixed reply
    pub struct MockEndpoint {
        addr: SocketAddr,
        received: Arc<Mutex<Vec<Value>>>,
    }

    impl MockEndpoint {
        pub async fn start(status: StatusCode, body: String) -> Self {
            let received = Arc::new(Mutex::new(Vec::new()));
            let state = MockState {
                status,
                body,
                received: received.clone(),
            };

            let router = Router::new()
                .route("/", post(mock_completion))
                .with_state(state);

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, router).await.unwrap();
            });

            Self { addr, received }
        }

        pub fn url(&self) -> String {
            format!("http://{}/", self.addr)
        }

        /// Request bodies seen so far
        pub fn received(&self) -> Vec<Value> {
            self.received.lock().unwrap().clone()
        }
    }

    async fn mock_completion(
        State(state): State<MockState>,
        Json(body): Json<Value>,
    ) -> (StatusCode, String) {
        state.received.lock().unwrap().push(body);
        (state.status, state.body.clone())
    }
}

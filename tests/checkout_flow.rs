//! Full storefront flow against a file-backed store: build the
//! catalog, fill the cart, rename a product, reconcile, price and
//! check out.

use cartwheel::{
    CartManager, CatalogManager, CheckoutManager, Config, CustomerDetails, HttpOrderTransport,
    PaymentDetails, PaymentMethod, ProductEntry, Store, StoreEvent, build_cart_view,
};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn entry(name: &str, price_text: &str, weights: &[&str]) -> ProductEntry {
    ProductEntry {
        name: name.to_string(),
        price_text: price_text.to_string(),
        image: format!("images/{}.jpg", name.to_lowercase().replace(' ', "-")),
        weight_options: weights.iter().map(|w| w.to_string()).collect(),
        original_name: None,
    }
}

fn customer() -> CustomerDetails {
    CustomerDetails {
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9876543210".to_string(),
        address: "12 Lake View Road, Pune".to_string(),
    }
}

/// Serve exactly one canned HTTP response, returning the base URL
async fn spawn_one_shot_server(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_catalog_change_remaps_cart_and_checkout_records_order() {
    cartwheel::init_logger();

    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(dir.path().to_str().unwrap(), "http://localhost:5000");
    let store = Store::open(config.store_path()).unwrap();

    let catalog = CatalogManager::new(store.clone());
    let cart = CartManager::new(store.clone());

    catalog
        .rebuild_from_entries(&[
            entry("Almonds", "Rs. 20/kg", &["1kg", "5kg"]),
            entry("Cashews", "Rs. 900/kg", &["1kg"]),
        ])
        .unwrap();

    cart.add_item("almonds", 5).unwrap();
    cart.add_item("almonds", 5).unwrap();
    assert_eq!(cart.count().unwrap(), 2);

    // The product view renames Almonds, keeping its tracked identity
    let mut events = store.subscribe();
    let mut renamed = entry("Premium Almonds", "Rs. 20/kg", &["1kg", "5kg"]);
    renamed.original_name = Some("Almonds".to_string());
    catalog
        .rebuild_from_entries(&[renamed, entry("Cashews", "Rs. 900/kg", &["1kg"])])
        .unwrap();

    assert_eq!(events.try_recv().unwrap(), StoreEvent::CatalogUpdated);

    let items = cart.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, "premium-almonds");
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].weight, 5);

    let view = build_cart_view(&items, &catalog.catalog().unwrap());
    assert_eq!(view[0].name, "Premium Almonds");
    assert_eq!(view[0].line_total, 200.0);

    let checkout = CheckoutManager::local(store.clone());
    let order = checkout
        .submit_order(&customer(), &PaymentDetails::Cod)
        .await
        .unwrap();

    assert!(order.id.starts_with("ORD-"));
    assert_eq!(order.payment_method, PaymentMethod::Cod);
    assert_eq!(order.subtotal, 200.0);
    assert_eq!(order.tax, 10.0);
    assert_eq!(order.delivery, 50.0);
    assert_eq!(order.total, 260.0);

    assert!(cart.items().unwrap().is_empty());
    assert_eq!(checkout.orders().unwrap().len(), 1);
}

#[tokio::test]
async fn test_cart_and_orders_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storefront.redb");

    {
        let store = Store::open(&path).unwrap();
        let catalog = CatalogManager::new(store.clone());
        catalog
            .rebuild_from_entries(&[entry("Almonds", "Rs. 20/kg", &["1kg", "5kg"])])
            .unwrap();

        let cart = CartManager::new(store.clone());
        cart.add_item("almonds", 5).unwrap();

        CheckoutManager::local(store.clone())
            .submit_order(&customer(), &PaymentDetails::Cod)
            .await
            .unwrap();

        cart.add_item("almonds", 1).unwrap();
    }

    let store = Store::open(&path).unwrap();
    let cart = CartManager::new(store.clone());
    assert_eq!(cart.items().unwrap().len(), 1);
    assert_eq!(cart.items().unwrap()[0].weight, 1);
    assert_eq!(CheckoutManager::local(store).orders().unwrap().len(), 1);
}

#[tokio::test]
async fn test_checkout_delivers_to_backend_before_recording() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("storefront.redb")).unwrap();

    let catalog = CatalogManager::new(store.clone());
    catalog
        .rebuild_from_entries(&[entry("Almonds", "Rs. 20/kg", &["1kg", "5kg"])])
        .unwrap();
    CartManager::new(store.clone()).add_item("almonds", 5).unwrap();

    let base = spawn_one_shot_server("200 OK", r#"{"message":"Order received"}"#).await;
    let transport = HttpOrderTransport::new(&base).unwrap();
    let checkout = CheckoutManager::new(store.clone(), Arc::new(transport));

    let order = checkout
        .submit_order(
            &customer(),
            &PaymentDetails::Upi {
                id: "asha@upi".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(order.payment_method, PaymentMethod::Upi);
    assert_eq!(checkout.orders().unwrap().len(), 1);
    assert!(CartManager::new(store).items().unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_backend_aborts_checkout() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("storefront.redb")).unwrap();

    let catalog = CatalogManager::new(store.clone());
    catalog
        .rebuild_from_entries(&[entry("Almonds", "Rs. 20/kg", &["1kg", "5kg"])])
        .unwrap();
    CartManager::new(store.clone()).add_item("almonds", 5).unwrap();

    let base = spawn_one_shot_server("400 Bad Request", r#"{"message":"Invalid order"}"#).await;
    let transport = HttpOrderTransport::new(&base).unwrap();
    let checkout = CheckoutManager::new(store.clone(), Arc::new(transport));

    let err = checkout
        .submit_order(&customer(), &PaymentDetails::Cod)
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Invalid order");
    assert_eq!(CartManager::new(store.clone()).items().unwrap().len(), 1);
    assert!(checkout.orders().unwrap().is_empty());
}

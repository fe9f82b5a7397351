//! Serialization shape tests for the store-facing entities.

use toko_model::{
    Audience, Customer, Direction, Payment, PaymentAllocation, PaymentSource, Product,
    StockHistoryEntry,
};

#[test]
fn product_serializes_camel_case() {
    let product = Product {
        title: "IPA Kelas VIII (Erlangga)".to_string(),
        price: 45_000,
        grade: 8,
        publisher: "Erlangga".to_string(),
        audience: Audience::Siswa,
        stock: 0,
    };
    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["audience"], "SISWA");
    assert_eq!(json["price"], 45_000);
    assert_eq!(json["stock"], 0);
}

#[test]
fn customer_opening_balance_key() {
    let customer = Customer {
        name: "Toko Sari".to_string(),
        phone: "0813".to_string(),
        opening_balance: 12_500,
    };
    let json = serde_json::to_value(&customer).unwrap();
    assert_eq!(json["openingBalance"], 12_500);
}

#[test]
fn payment_direction_and_source_tags() {
    let payment = Payment {
        customer_id: "C1".to_string(),
        customer_name: "Budi".to_string(),
        date: "2020-02-01".to_string(),
        direction: Direction::In,
        source: PaymentSource::Tunai,
        amount: 40_000,
        memo: "Pembayaran Tunai Awal".to_string(),
    };
    let json = serde_json::to_value(&payment).unwrap();
    assert_eq!(json["direction"], "IN");
    assert_eq!(json["source"], "TUNAI");
    assert_eq!(json["customerId"], "C1");
}

#[test]
fn allocation_links_by_ids() {
    let allocation = PaymentAllocation {
        payment_id: "PAY1".to_string(),
        invoice_id: "INV1".to_string(),
        amount: 40_000,
    };
    let json = serde_json::to_value(&allocation).unwrap();
    assert_eq!(json["paymentId"], "PAY1");
    assert_eq!(json["invoiceId"], "INV1");
}

#[test]
fn stock_history_snapshot_fields() {
    let entry = StockHistoryEntry {
        product_id: "3001".to_string(),
        title: "Buku A".to_string(),
        memo: "Penjualan + Budi".to_string(),
        stock_before: 10,
        stock_after: 8,
        delta: -2,
        actor: "Budi".to_string(),
        date: "2020-05-01".to_string(),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["stockBefore"], 10);
    assert_eq!(json["stockAfter"], 8);
    assert_eq!(json["delta"], -2);
    assert_eq!(json["productId"], "3001");
}

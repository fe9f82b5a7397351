use std::collections::BTreeMap;

use toko_model::{Customer, CustomerRow};
use toko_transform::{parse_amount, sanitize_id};

/// Builds the customer map from the `PELANGGAN` master.
///
/// Straight field copy; phone numbers are kept verbatim, no format check.
pub fn materialize_customers(rows: &[CustomerRow]) -> BTreeMap<String, Customer> {
    let mut customers = BTreeMap::new();
    for row in rows {
        let key = sanitize_id(&row.id);
        if key.is_empty() {
            continue;
        }
        customers.insert(
            key,
            Customer {
                name: row.name.clone(),
                phone: row.phone.clone(),
                opening_balance: parse_amount(&row.opening_balance),
            },
        );
    }
    customers
}

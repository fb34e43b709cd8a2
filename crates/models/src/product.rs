use serde::{Deserialize, Serialize};

use crate::{id::RecordId, resource::Resource};

/// Stored product fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductBase {
    pub name: String,
    pub price: f64,
}

/// Payload for creating or replacing a product. Unknown fields are rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
}

impl From<ProductCreate> for ProductBase {
    fn from(c: ProductCreate) -> Self {
        Self { name: c.name, price: c.price }
    }
}

/// Product as returned to callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: RecordId,
    pub name: String,
    pub price: f64,
}

impl Resource for Product {
    type Base = ProductBase;
    type Create = ProductCreate;

    const NAME: &'static str = "Product";
    const COLLECTION: &'static str = "products";
    const DATABASE: &'static str = "product_database";

    fn from_stored(id: RecordId, base: ProductBase) -> Self {
        Self { id, name: base.name, price: base.price }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn base(&self) -> ProductBase {
        ProductBase { name: self.name.clone(), price: self.price }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_payload_requires_exact_fields() {
        let ok: ProductCreate = serde_json::from_value(json!({"name": "Widget", "price": 9.99})).unwrap();
        assert_eq!(ok.name, "Widget");

        assert!(serde_json::from_value::<ProductCreate>(json!({"name": "Widget"})).is_err());
        assert!(serde_json::from_value::<ProductCreate>(
            json!({"name": "Widget", "price": 1.0, "color": "red"})
        )
        .is_err());
        assert!(serde_json::from_value::<ProductCreate>(json!({"name": "Widget", "price": "cheap"})).is_err());
    }

    #[test]
    fn integer_price_is_accepted() {
        let c: ProductCreate = serde_json::from_value(json!({"name": "Bolt", "price": 3})).unwrap();
        assert_eq!(c.price, 3.0);
    }

    #[test]
    fn view_serializes_id_as_underscore_id() {
        let id = RecordId::parse("65a1b2c3d4e5f60718293a4b").unwrap();
        let p = Product::from_stored(id, ProductBase { name: "Widget".into(), price: 9.99 });
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({"_id": "65a1b2c3d4e5f60718293a4b", "name": "Widget", "price": 9.99})
        );
    }

    #[test]
    fn view_accepts_either_id_spelling() {
        let a: Product = serde_json::from_value(
            json!({"_id": "65a1b2c3d4e5f60718293a4b", "name": "W", "price": 1.5}),
        )
        .unwrap();
        let b: Product = serde_json::from_value(
            json!({"id": "65a1b2c3d4e5f60718293a4b", "name": "W", "price": 1.5}),
        )
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.base(), ProductBase { name: "W".into(), price: 1.5 });
    }
}

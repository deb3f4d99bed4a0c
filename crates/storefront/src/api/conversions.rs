//! Wire-to-domain conversion functions.
//!
//! Normalization happens here, once, at the edge: missing names and
//! descriptions become empty strings, empty category references become
//! `None`, and negative order quantities clamp to zero. Downstream code can
//! then treat the domain types as total.

use sparkshop_core::{
    Banner, BannerId, Category, CategoryId, Order, OrderId, OrderItem, Product, ProductId,
    StoreSettings, TimelineStep,
};

use super::types::{
    WireBanner, WireCategory, WireOrder, WireOrderItem, WireProduct, WireSettings,
    WireTimelineStep,
};

pub fn convert_product(wire: WireProduct) -> Product {
    Product {
        id: ProductId::new(wire.id),
        name: wire.name.unwrap_or_default(),
        description: wire.description.unwrap_or_default(),
        price: wire.price,
        category: wire
            .category
            .filter(|c| !c.trim().is_empty())
            .map(CategoryId::new),
        best_selling: wire.best_selling,
        image: wire.image,
    }
}

pub fn convert_category(wire: WireCategory) -> Category {
    Category {
        id: CategoryId::new(wire.id),
        name: wire.name.unwrap_or_default(),
        image: wire.image,
    }
}

pub fn convert_banner(wire: WireBanner) -> Banner {
    Banner {
        id: BannerId::new(wire.id),
        image: wire.image.unwrap_or_default(),
        link: wire.link,
    }
}

pub fn convert_order(wire: WireOrder) -> Order {
    Order {
        id: OrderId::new(wire.id),
        placed_at: wire.placed_at,
        items: wire.items.into_iter().map(convert_order_item).collect(),
        steps: wire.steps.into_iter().map(convert_timeline_step).collect(),
    }
}

fn convert_order_item(wire: WireOrderItem) -> OrderItem {
    OrderItem {
        product_id: ProductId::new(wire.product_id),
        quantity: u32::try_from(wire.quantity.max(0)).unwrap_or(0),
    }
}

fn convert_timeline_step(wire: WireTimelineStep) -> TimelineStep {
    TimelineStep {
        key: wire.key.unwrap_or_default(),
        label: wire.label.unwrap_or_default(),
        done: wire.done,
        date: wire.date,
    }
}

pub fn convert_settings(wire: WireSettings) -> StoreSettings {
    StoreSettings {
        store_name: wire.store_name.unwrap_or_default(),
        currency_code: wire.currency_code.unwrap_or_else(|| "INR".to_owned()),
        support_phone: wire.support_phone,
        support_email: wire.support_email,
        announcement: wire.announcement,
    }
}

use stockroom_marketplace::{FilterPatch, SortKey};
use stockroom_session::{Session, SessionConfig};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = SessionConfig::from_env();
    let mut session = Session::open(&config)?;

    let stats = session.inventory().stats();
    tracing::info!(
        total_value = stats.total_value,
        low_stock = stats.low_stock_count,
        total_items = stats.total_items,
        "inventory stats"
    );

    for item in session.inventory().filtered_items() {
        tracing::info!(sku = %item.inventory_number, title = %item.title, available = item.available_quantity, "inventory item");
    }

    session
        .marketplace_mut()
        .update_filters(FilterPatch::sort_by(SortKey::PriceAsc));
    for listing in session.marketplace().listings() {
        tracing::info!(
            title = %listing.title,
            price = listing.price,
            seller = %listing.seller_name,
            "marketplace listing"
        );
    }

    Ok(())
}

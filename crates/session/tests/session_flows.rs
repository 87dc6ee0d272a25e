use stockroom_ai::{Assistant, ScriptedBackend};
use stockroom_core::{CategoryId, ItemId};
use stockroom_events::Event;
use stockroom_inventory::{DeleteOutcome, InventoryItem, ItemPatch};
use stockroom_marketplace::{
    Category, CategoryFilter, Condition, FilterPatch, ListingStatus, MarketplaceListing, SellerType,
    SortKey,
};
use stockroom_session::{SeedData, Session, SessionConfig};

fn demo_session() -> Session {
    Session::open(&SessionConfig::default()).expect("demo seed loads")
}

fn listing_numbers(session: &Session) -> Vec<u128> {
    session
        .marketplace()
        .listings()
        .iter()
        .map(|l| l.id.as_uuid().as_u128())
        .collect()
}

fn scenario_listing(i: u64) -> MarketplaceListing {
    MarketplaceListing {
        id: ItemId::from_u128(i as u128 + 1),
        title: format!("Scenario item {i}"),
        inventory_number: format!("SC-{i:02}"),
        description: String::new(),
        price: 15_000 + i * 1_000,
        quantity: 1,
        available_quantity: 1,
        category_id: CategoryId(if i % 2 == 0 { 1 } else { 2 }),
        condition: Condition::New,
        seller_name: "Scenario Seller".to_string(),
        seller_rating: Some(4.0),
        seller_type: Some(SellerType::Enterprise),
        status: ListingStatus::Active,
    }
}

#[test]
fn alternating_catalog_filtered_by_category_sorted_by_price() {
    let seed = SeedData {
        categories: vec![Category::root(1, "One"), Category::root(2, "Two")],
        items: Vec::new(),
        listings: (0..20).map(scenario_listing).collect(),
    };
    let mut session = Session::from_seed(seed, &SessionConfig::default());

    session.marketplace_mut().update_filters(FilterPatch {
        category: Some(CategoryFilter::Category(CategoryId(1))),
        sort_by: Some(SortKey::PriceAsc),
        ..FilterPatch::default()
    });

    let prices: Vec<u64> = session.marketplace().listings().iter().map(|l| l.price).collect();
    assert_eq!(
        prices,
        (0..10).map(|k| 15_000 + k * 2_000).collect::<Vec<u64>>()
    );
}

#[test]
fn demo_inventory_stats_cover_the_whole_collection() {
    let mut session = demo_session();
    let stats = session.inventory().stats();
    assert_eq!(stats.total_items, 6);
    assert_eq!(stats.total_value, 1_370_500);
    assert_eq!(stats.low_stock_count, 3);

    session.inventory_mut().set_search_term("bosch");
    let hits = session.inventory().filtered_items();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Bosch Professional Drill 18V");
    assert_eq!(session.inventory().stats(), stats);
}

#[test]
fn demo_marketplace_hides_inactive_and_expands_one_category_level() {
    let mut session = demo_session();
    assert_eq!(listing_numbers(&session), vec![0x101, 0x102, 0x103, 0x104, 0x106, 0x107]);

    // Tools: power tools (10) and hand tools (11) come in, drills (100) do not.
    session.marketplace_mut().set_category_filter(CategoryId(1));
    assert_eq!(listing_numbers(&session), vec![0x102, 0x103]);

    session.marketplace_mut().set_category_filter(CategoryId(10));
    assert_eq!(listing_numbers(&session), vec![0x101, 0x102, 0x107]);

    session.marketplace_mut().reset_all_filters();
    assert_eq!(listing_numbers(&session).len(), 6);
}

#[test]
fn configured_price_ceiling_survives_reset() {
    let config = SessionConfig {
        max_price: Some(20_000),
        ..SessionConfig::default()
    };
    let mut session = Session::open(&config).unwrap();
    assert_eq!(listing_numbers(&session), vec![0x101, 0x102, 0x103, 0x106, 0x107]);

    session.marketplace_mut().update_filters(FilterPatch {
        conditions: Some([Condition::Used].into_iter().collect()),
        ..FilterPatch::default()
    });
    assert_eq!(listing_numbers(&session), vec![0x102]);

    session.marketplace_mut().reset_all_filters();
    assert_eq!(listing_numbers(&session).len(), 5);
}

#[test]
fn declined_delete_then_confirmed_delete() {
    let mut session = demo_session();
    let before: Vec<InventoryItem> = session.inventory().items().to_vec();
    let target = ItemId::from_u128(3);

    let outcome = session
        .inventory_mut()
        .delete_item(target, &|_: &InventoryItem| false)
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(session.inventory().items(), before.as_slice());

    let outcome = session
        .inventory_mut()
        .delete_item(target, &|_: &InventoryItem| true)
        .unwrap();
    assert!(outcome.is_removed());
    assert_eq!(session.inventory().len(), 5);
}

#[test]
fn observers_see_inventory_changes() {
    let mut session = demo_session();
    let changes = session.inventory().subscribe();

    session.inventory_mut().adjust_stock(ItemId::from_u128(5), 2).unwrap();
    session
        .inventory_mut()
        .update_item(
            ItemId::from_u128(5),
            ItemPatch {
                location: Some("D-02".into()),
                ..ItemPatch::default()
            },
        )
        .unwrap();

    let received = changes.drain();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].event_type(), "inventory.item.stock_adjusted");
    assert_eq!(received[1].event_type(), "inventory.item.updated");
    assert!(received.iter().all(|c| c.item_id() == ItemId::from_u128(5)));

    let truck = session.inventory().item(ItemId::from_u128(5)).unwrap();
    assert_eq!((truck.quantity, truck.available_quantity), (5, 5));
    assert_eq!(truck.location.as_deref(), Some("D-02"));
}

#[test]
fn ai_intake_adds_item_with_suggested_fields() {
    let mut session = demo_session();
    let assistant = Assistant::new(
        ScriptedBackend::new()
            .reply(r#"{"title":"Angle Grinder 125mm","description":"Corded, 900W","category":"power tools","estimatedPrice":6900}"#)
            .reply(r#"{"sku":"ag-125-900"}"#),
    );

    let id = session.intake_item(&assistant, "blue grinder, 125 mm disc", 7);

    let item = &session.inventory().items()[0];
    assert_eq!(item.id, id);
    assert_eq!(item.title, "Angle Grinder 125mm");
    assert_eq!(item.inventory_number, "AG-125-900");
    assert_eq!(item.price, 6_900);
    assert_eq!(item.category_id, Some(CategoryId(10)));
    assert_eq!(item.description.as_deref(), Some("Corded, 900W"));
    assert_eq!((item.quantity, item.available_quantity), (7, 7));
}

#[test]
fn ai_intake_with_failing_backend_uses_fallbacks() {
    let mut session = demo_session();
    let assistant = Assistant::new(ScriptedBackend::new().fail("offline").fail("offline"));

    session.intake_item(&assistant, "mystery box", 1);

    let item = &session.inventory().items()[0];
    assert_eq!(item.title, "Unidentified item");
    assert_eq!(item.inventory_number, "SKU-PENDING");
    assert_eq!(item.price, 0);
    assert_eq!(item.category_id, None);
    assert_eq!(session.inventory().len(), 7);
}

#[test]
fn seed_with_unrecognised_status_and_condition_loads_and_hides_the_listing() {
    let json = r#"{
        "categories": [{"id": 1, "name": "Tools"}],
        "listings": [
            {"id": "00000000-0000-0000-0000-000000000001", "title": "Drill", "inventoryNumber": "D-1",
             "price": 100, "categoryId": 1, "condition": "new", "sellerName": "Acme", "status": "active"},
            {"id": "00000000-0000-0000-0000-000000000002", "title": "Saw", "inventoryNumber": "S-1",
             "price": 100, "categoryId": 1, "condition": "for_parts", "sellerName": "Acme", "status": "pending"}
        ]
    }"#;
    let seed = SeedData::from_json(json).expect("unknown enum strings do not fail the seed");
    assert_eq!(seed.listings[1].status, ListingStatus::Other);
    assert_eq!(seed.listings[1].condition, Condition::Other);

    let session = Session::from_seed(seed, &SessionConfig::default());
    assert_eq!(session.marketplace().catalog().len(), 2);
    assert_eq!(listing_numbers(&session), vec![1]);
}

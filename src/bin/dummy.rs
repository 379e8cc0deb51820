use corkboard::{EventFilter, EventStore, MemoryStore};

#[tokio::main]
async fn main() {
    env_logger::init();

    let store = EventStore::new(MemoryStore::new());
    store.initialize().await;

    let events = store.get_all_events().await;
    for event in &events {
        println!(
            "  {}\t{}\t{}",
            event.id(),
            event.title(),
            event.price().unwrap_or("gratuit")
        );
    }

    let sporty = EventFilter::new().with_category("Sport").apply(&events);
    println!("{} sport event(s)", sporty.len());
}

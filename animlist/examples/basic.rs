use animlist::{AnimatedList, AnimatedListOptions, ImmediateDriver, Slot};

fn main() {
    // A list of five rows with a driver that settles on the next tick (no animation).
    let mut rows: Vec<String> = (0..5).map(|i| format!("row {i}")).collect();
    let mut list = AnimatedList::new(
        AnimatedListOptions::new(rows.len()),
        ImmediateDriver::factory(),
    );

    // Remove row 1: the backing data changes now, the slot keeps rendering until settled.
    let removed = rows.remove(1);
    list.remove_item(1, move |p| format!("{removed} (leaving, {p:.2})"));

    // Insert a new row at the top.
    rows.insert(0, "fresh".to_string());
    list.insert_item(0);

    println!("item_count={} logical={}", list.item_count(), list.logical_count());
    for physical in 0..list.item_count() {
        let line = list.render_slot(physical, |i, p| format!("{} ({p:.2})", rows[i]));
        let kind = match list.slot(physical) {
            Slot::Settled { .. } => "settled",
            Slot::Incoming { .. } => "incoming",
            Slot::Outgoing { .. } => "outgoing",
        };
        println!("  [{physical}] {kind:8} {line}");
    }

    let retired = list.tick(0);
    println!("tick: retired={retired} item_count={}", list.item_count());
}

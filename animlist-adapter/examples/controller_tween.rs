use animlist::AnimatedListOptions;
use animlist_adapter::{Controller, Easing};

fn main() {
    // Example: a frame loop driving insert/remove transitions without holding any UI objects.
    //
    // An adapter would:
    // - mutate its backing data and mirror the change with insert_item/remove_item
    // - call tick(now_ms) in a frame loop / timer
    // - redraw whenever tick returns true, rendering each physical slot
    let mut rows: Vec<String> = (0..4).map(|i| format!("row {i}")).collect();
    let mut c = Controller::new(
        AnimatedListOptions::new(rows.len()).with_durations_ms(160, 240),
        Easing::EaseOutCubic,
    );

    rows.insert(2, "new row".to_string());
    c.insert_item(2);
    let removed = rows.remove(0);
    c.remove_item(0, move |p| format!("{removed} (fading {p:.2})"));

    let mut now_ms = 0u64;
    while c.tick(now_ms) {
        if now_ms % 80 == 0 {
            println!("t={now_ms} state={:?}", c.state());
            c.list().for_each_rendered(
                0..usize::MAX,
                |i, p| format!("{} ({p:.2})", rows[i]),
                |physical, line| println!("  [{physical}] {line}"),
            );
        }
        now_ms += 16;
    }

    println!("done at t={now_ms}: state={:?}", c.state());
}

use serde_json::{json, Value};
use crate::draw_engine::models::{PoolSnapshot, PoolStatus};

/// Status line shown above the number display.
fn status_line(snapshot: &PoolSnapshot, spinning: bool) -> &'static str {
    if spinning {
        "Drawing..."
    } else if snapshot.status == PoolStatus::Exhausted {
        "All numbers drawn"
    } else if snapshot.last_drawn.is_some() {
        "Number drawn!"
    } else {
        "Press draw to start"
    }
}

/// Build the drawn-history array; the latest entry is flagged so the client
/// can highlight it.
fn drawn_history(snapshot: &PoolSnapshot) -> Value {
    let last_idx = snapshot.drawn.len().saturating_sub(1);
    let entries: Vec<Value> = snapshot
        .drawn
        .iter()
        .enumerate()
        .map(|(i, n)| {
            json!({
                "number": n,
                "is_latest": !snapshot.drawn.is_empty() && i == last_idx
            })
        })
        .collect();
    Value::Array(entries)
}

/// Map a [`PoolSnapshot`] to the JSON view state a display client renders.
///
/// `spinning` and `current` come from the presentation layer's reveal loop:
/// while spinning, `current` is the decoy frame on screen; afterwards it is
/// the committed value (or `None` before the first draw).
pub fn to_view_state(snapshot: &PoolSnapshot, spinning: bool, current: Option<u32>) -> Value {
    json!({
        "pool_size": snapshot.pool_size,
        "status":    snapshot.status.to_string(),
        "spinning":  spinning,
        "status_line": status_line(snapshot, spinning),
        "current":   current,
        "badges": {
            "remaining": snapshot.remaining.len(),
            "drawn":     snapshot.drawn.len(),
        },
        "drawn_history": drawn_history(snapshot),
        "available": &snapshot.remaining,
    })
}

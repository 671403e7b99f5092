use log::debug;
use serde_json::json;
use std::collections::VecDeque;

use crate::error::CoreError;
use crate::mvu::round::{Msg, RoundModel, run_effect, update};
use crate::storage::Storage;

/// Runs the MVU loop for a round: seeds with `init_msg` and drains effects in order.
///
/// # Errors
///
/// Returns the first `CoreError` an effect reports; the model keeps it in `error`.
pub async fn run_round(
    model: &mut RoundModel,
    init_msg: Msg,
    storage: &dyn Storage,
) -> Result<(), CoreError> {
    let mut effects: VecDeque<_> = update(model, init_msg).into();
    while let Some(effect) = effects.pop_front() {
        debug!(
            "{}",
            json!({"mvu":"effect_start","effect": format!("{effect:?}")})
        );
        let msg = run_effect(effect, model, storage).await;
        match msg {
            Msg::Failed(e) => {
                update(model, Msg::Failed(e.clone()));
                return Err(e);
            }
            other => {
                let next = update(model, other);
                debug!(
                    "{}",
                    json!({"mvu":"update","queued_effects": next.iter().map(|x| format!("{x:?}")).collect::<Vec<_>>()})
                );
                effects.extend(next);
            }
        }
    }
    Ok(())
}

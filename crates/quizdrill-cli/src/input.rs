//! Parsing of in-session user input.
//!
//! Maps one input line to a session action: a string of choice letters
//! (e.g. `AB`, case-insensitive), `back`, `next`, or `r`. Anything else is
//! rejected so the caller can re-prompt without touching session state.

use quizdrill_core::session::SessionAction;

pub fn parse_action(input: &str, answer_count: usize) -> Option<SessionAction> {
    let normalized = input.trim().to_uppercase();
    match normalized.as_str() {
        "BACK" => Some(SessionAction::Back),
        "NEXT" => Some(SessionAction::Next),
        "R" => Some(SessionAction::RefreshClock),
        "" => None,
        letters => {
            let mut indices = Vec::with_capacity(letters.len());
            for ch in letters.chars() {
                if !ch.is_ascii_uppercase() {
                    return None;
                }
                let index = (ch as u8 - b'A') as usize;
                if index >= answer_count {
                    return None;
                }
                indices.push(index);
            }
            indices.sort_unstable();
            indices.dedup();
            Some(SessionAction::Answer(indices))
        }
    }
}

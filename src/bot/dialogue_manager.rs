//! Dialogue Manager module for conversation state transitions
//!
//! [`transition`] is total over `(ConversationState, Intent)` and does no I/O.
//! The message handler performs the returned [`Action`] and stores
//! [`Transition::next`].

use crate::dialogue::{validate_order_text, ConversationState};

use super::intent::{Intent, MenuLabels};

/// Outbound work for one inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Welcome,
    OrderPrompt,
    About,
    Delivery,
    Contacts,
    MainMenu,
    /// Confirm to the customer and forward the trimmed text to the administrator
    SubmitOrder(String),
    /// Tell the customer nothing was entered
    RejectOrder,
    /// Unmatched text while idle: no reply
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub next: ConversationState,
}

impl Transition {
    fn new(action: Action, next: ConversationState) -> Self {
        Self { action, next }
    }
}

/// Decide the action and next state for an inbound message.
///
/// Menu intents win over order capture, except that the back label while
/// an order is being drafted counts as an empty order. A draft that is a
/// label once trimmed is rejected rather than forwarded.
pub fn transition(state: ConversationState, intent: Intent, labels: &MenuLabels) -> Transition {
    use crate::dialogue::ConversationState::{AwaitingOrderText, Idle};

    match (state, intent) {
        (_, Intent::Start) => Transition::new(Action::Welcome, Idle),
        (_, Intent::LeaveOrder) => Transition::new(Action::OrderPrompt, AwaitingOrderText),
        (state, Intent::AboutUs) => Transition::new(Action::About, state),
        (state, Intent::Delivery) => Transition::new(Action::Delivery, state),
        (state, Intent::Contacts) => Transition::new(Action::Contacts, state),

        (AwaitingOrderText, Intent::Back) => Transition::new(Action::RejectOrder, Idle),
        (Idle, Intent::Back) => Transition::new(Action::MainMenu, Idle),

        (AwaitingOrderText, Intent::FreeText(text)) => match validate_order_text(&text, &labels.all()) {
            Some(order) => Transition::new(Action::SubmitOrder(order.to_string()), Idle),
            None => Transition::new(Action::RejectOrder, Idle),
        },
        (Idle, Intent::FreeText(_)) => Transition::new(Action::Ignore, Idle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::ConversationState::{AwaitingOrderText, Idle};

    fn labels() -> MenuLabels {
        MenuLabels {
            leave_order: "📝 Leave an order".to_string(),
            about: "ℹ️ About us".to_string(),
            delivery: "🚚 Delivery & payment".to_string(),
            contacts: "📞 Contacts".to_string(),
            back: "🔙 Back".to_string(),
        }
    }

    fn free(text: &str) -> Intent {
        Intent::FreeText(text.to_string())
    }

    #[test]
    fn test_start_resets_from_any_state() {
        for state in [Idle, AwaitingOrderText] {
            let t = transition(state, Intent::Start, &labels());
            assert_eq!(t.action, Action::Welcome);
            assert_eq!(t.next, Idle);
        }
    }

    #[test]
    fn test_leave_order_enters_capture() {
        for state in [Idle, AwaitingOrderText] {
            let t = transition(state, Intent::LeaveOrder, &labels());
            assert_eq!(t.action, Action::OrderPrompt);
            assert_eq!(t.next, AwaitingOrderText);
        }
    }

    #[test]
    fn test_info_pages_keep_state() {
        for state in [Idle, AwaitingOrderText] {
            assert_eq!(transition(state, Intent::AboutUs, &labels()).next, state);
            assert_eq!(transition(state, Intent::Delivery, &labels()).next, state);
            assert_eq!(transition(state, Intent::Contacts, &labels()).next, state);
        }
        assert_eq!(
            transition(AwaitingOrderText, Intent::Contacts, &labels()).action,
            Action::Contacts
        );
    }

    #[test]
    fn test_back() {
        assert_eq!(
            transition(Idle, Intent::Back, &labels()),
            Transition::new(Action::MainMenu, Idle)
        );
        assert_eq!(
            transition(AwaitingOrderText, Intent::Back, &labels()),
            Transition::new(Action::RejectOrder, Idle)
        );
    }

    #[test]
    fn test_order_capture() {
        assert_eq!(
            transition(AwaitingOrderText, free("  Wilson Blade 98, 305g \n"), &labels()),
            Transition::new(Action::SubmitOrder("Wilson Blade 98, 305g".to_string()), Idle)
        );
        assert_eq!(
            transition(AwaitingOrderText, free(""), &labels()),
            Transition::new(Action::RejectOrder, Idle)
        );
        assert_eq!(
            transition(AwaitingOrderText, free("   "), &labels()),
            Transition::new(Action::RejectOrder, Idle)
        );
        assert_eq!(
            transition(AwaitingOrderText, free(" 🔙 Back "), &labels()),
            Transition::new(Action::RejectOrder, Idle)
        );
        for padded in [" 📞 Contacts", "ℹ️ About us\n", "\t🚚 Delivery & payment ", "📝 Leave an order "] {
            assert_eq!(
                transition(AwaitingOrderText, free(padded), &labels()),
                Transition::new(Action::RejectOrder, Idle)
            );
        }
    }

    #[test]
    fn test_idle_free_text_is_ignored() {
        assert_eq!(
            transition(Idle, free("hello?"), &labels()),
            Transition::new(Action::Ignore, Idle)
        );
    }
}

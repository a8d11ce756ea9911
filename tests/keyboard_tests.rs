// Host-side tests for the key bindings shared by the web and native frontends.

use story_core::Trigger;

#[test]
fn next_keys_advance() {
    for key in [" ", "Enter", "ArrowRight", "n", "N"] {
        assert_eq!(Trigger::from_key(key), Some(Trigger::Advance), "{key:?}");
    }
}

#[test]
fn choice_keys_accept_digits_and_letters() {
    assert_eq!(Trigger::from_key("1"), Some(Trigger::ChoiceA));
    assert_eq!(Trigger::from_key("a"), Some(Trigger::ChoiceA));
    assert_eq!(Trigger::from_key("A"), Some(Trigger::ChoiceA));
    assert_eq!(Trigger::from_key("2"), Some(Trigger::ChoiceB));
    assert_eq!(Trigger::from_key("b"), Some(Trigger::ChoiceB));
    assert_eq!(Trigger::from_key("B"), Some(Trigger::ChoiceB));
}

#[test]
fn restart_key() {
    assert_eq!(Trigger::from_key("r"), Some(Trigger::Restart));
    assert_eq!(Trigger::from_key("R"), Some(Trigger::Restart));
}

#[test]
fn unbound_keys_are_ignored() {
    for key in ["", "3", "Escape", "ArrowLeft", "Shift", "x", "Space"] {
        assert_eq!(Trigger::from_key(key), None, "{key:?}");
    }
}

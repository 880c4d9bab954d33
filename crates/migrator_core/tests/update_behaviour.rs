use std::sync::Once;

use migrator_core::{update, AppState, Effect, Msg, EMPTY_INPUT_MESSAGE};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(migrator_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::ConvertClicked)
}

#[test]
fn convert_emits_effect_with_raw_input() {
    init_logging();
    let input = "line one\n[URL]https://forum.indowebster.com/showthread.php?t=1[/URL]\n";

    let (state, effects) = submit(AppState::new(), input);

    assert_eq!(
        effects,
        vec![Effect::Convert {
            input: input.to_string(),
        }]
    );
    assert!(state.is_converting());
    assert_eq!(state.view().output, None);
}

#[test]
fn empty_input_is_rejected_with_notification() {
    init_logging();
    for input in ["", "  \n\t\n"] {
        let (state, effects) = submit(AppState::new(), input);

        assert_eq!(
            effects,
            vec![Effect::Notify {
                message: EMPTY_INPUT_MESSAGE.to_string(),
            }]
        );
        assert!(!state.is_converting());
        assert_eq!(state.view().notification.as_deref(), Some("input is empty"));
    }
}

#[test]
fn finished_conversion_is_shown_verbatim() {
    init_logging();
    let (state, _) = submit(AppState::new(), "text");
    let (state, effects) = update(state, Msg::ConversionFinished("converted\n".to_string()));

    assert!(effects.is_empty());
    assert!(!state.is_converting());
    assert_eq!(state.view().output.as_deref(), Some("converted\n"));
}

#[test]
fn second_click_while_converting_is_ignored() {
    init_logging();
    let (state, _) = submit(AppState::new(), "text");
    let (state, effects) = update(state, Msg::ConvertClicked);

    assert!(effects.is_empty());
    assert!(state.is_converting());
}

#[test]
fn successful_convert_clears_previous_notification() {
    init_logging();
    let (state, _) = submit(AppState::new(), "");
    assert!(state.view().notification.is_some());

    let (state, effects) = submit(state, "now with text");
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().notification, None);
}

#[test]
fn latest_input_is_the_one_converted() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("first".to_string()));
    let (state, effects) = submit(state, "second");

    assert_eq!(state.input(), "second");
    assert_eq!(
        effects,
        vec![Effect::Convert {
            input: "second".to_string(),
        }]
    );
}

use migrator_logging::{migrate_debug, migrate_info};

use crate::{AppState, Effect, Msg, EMPTY_INPUT_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::ConvertClicked => {
            if state.is_converting() {
                migrate_debug!("Convert requested while a conversion is running; ignored");
                return (state, Vec::new());
            }
            if !state.has_input() {
                migrate_info!("Convert requested with empty input");
                state.notify(EMPTY_INPUT_MESSAGE);
                return (
                    state,
                    vec![Effect::Notify {
                        message: EMPTY_INPUT_MESSAGE.to_string(),
                    }],
                );
            }
            state.begin_conversion();
            vec![Effect::Convert {
                input: state.input().to_string(),
            }]
        }
        Msg::ConversionFinished(output) => {
            state.finish_conversion(output);
            Vec::new()
        }
    };

    (state, effects)
}

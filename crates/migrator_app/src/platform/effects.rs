use migrator_core::{Effect, Msg};
use migrator_engine::Converter;
use migrator_logging::{migrate_info, migrate_warn};

/// Executes core effects against the engine and returns the resulting messages.
pub struct EffectRunner {
    converter: Box<dyn Converter>,
}

impl EffectRunner {
    pub fn new(converter: Box<dyn Converter>) -> Self {
        Self { converter }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut feedback = Vec::new();
        for effect in effects {
            match effect {
                Effect::Convert { input } => {
                    migrate_info!("Converting input_len={}", input.len());
                    let output = self.converter.convert(&input);
                    feedback.push(Msg::ConversionFinished(output));
                }
                Effect::Notify { message } => {
                    migrate_warn!("Notification: {}", message);
                }
            }
        }
        feedback
    }
}

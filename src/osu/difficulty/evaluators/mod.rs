pub use self::{
    aim::{AimDifficultyValue, AimEvaluator, AimStrain},
    cognition::CognitionEvaluator,
    flashlight::FlashlightEvaluator,
    reading::{ReadingEvaluator, RhythmRepeats},
};

mod aim;
mod cognition;
mod flashlight;
mod reading;

pub use self::{color::ColorEvaluator, stamina::StaminaEvaluator};

mod color;
mod stamina;

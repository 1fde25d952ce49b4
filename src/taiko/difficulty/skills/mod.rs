pub use self::{color::Color, stamina::Stamina};

mod color;
mod stamina;

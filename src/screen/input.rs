use super::error::ScreenResult;
use super::types::Clicker;
use enigo::{Button, Direction, Enigo, Mouse, Settings as EnigoSettings};

/// Left-clicks at wherever the cursor currently is
pub struct EnigoClicker {
    enigo: Enigo,
}

impl EnigoClicker {
    pub fn new() -> ScreenResult<Self> {
        Ok(Self {
            enigo: Enigo::new(&EnigoSettings::default())?,
        })
    }
}

impl Clicker for EnigoClicker {
    fn click(&mut self) -> ScreenResult<()> {
        self.enigo.button(Button::Left, Direction::Click)?;
        Ok(())
    }
}

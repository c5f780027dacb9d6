/// Tracks whether the scan position lies inside a single-quoted literal.
///
/// Every `'` toggles the state. The target format has no escape sequences,
/// and literals never span lines, so each line starts outside a string.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuoteState {
    inside: bool,
}

impl QuoteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inside(self) -> bool {
        self.inside
    }

    pub fn advance(&mut self, b: u8) {
        if b == b'\'' {
            self.inside = !self.inside;
        }
    }
}

use serde::Serialize;

/// Which subset of bit positions to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flip {
    /// Bit positions 0, 2, 4, ...
    Even,
    /// Bit positions 1, 3, 5, ...
    Odd,
    All,
}

impl Flip {
    /// Output order, independent of the order flags were given in.
    pub const ORDER: [Flip; 3] = [Flip::Even, Flip::Odd, Flip::All];

    pub const fn mask(self) -> u16 {
        match self {
            Flip::Even => 0x5555,
            Flip::Odd => 0xAAAA,
            Flip::All => 0xFFFF,
        }
    }

    pub const fn apply(self, value: u16) -> u16 {
        value ^ self.mask()
    }

    pub fn name(self) -> &'static str {
        match self {
            Flip::Even => "even",
            Flip::Odd => "odd",
            Flip::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Flip::Even => "Even bits flipped",
            Flip::Odd => "Odd bits flipped",
            Flip::All => "All bits flipped",
        }
    }
}

/// The flips requested for one run.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipSet {
    pub even: bool,
    pub odd: bool,
    pub all: bool,
}

impl FlipSet {
    pub fn contains(&self, flip: Flip) -> bool {
        match flip {
            Flip::Even => self.even,
            Flip::Odd => self.odd,
            Flip::All => self.all,
        }
    }

    /// Requested flips in output order.
    pub fn requested(&self) -> impl Iterator<Item = Flip> + '_ {
        Flip::ORDER.into_iter().filter(|f| self.contains(*f))
    }
}
